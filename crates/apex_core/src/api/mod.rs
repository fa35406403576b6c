//! Host-facing JSON API

pub mod json_api;

pub use json_api::{
    generate_commentary_json, simulate_race_json, CommentaryRequest, CommentaryResponse,
    DriverTally, RaceRequest, RaceResponse,
};
