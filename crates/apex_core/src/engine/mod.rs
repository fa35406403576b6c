//! Race weekend engine
//!
//! - `constants`: every tuning constant, grouped by concern
//! - `race_sim`: qualifying, weather, reliability and race classification
//! - `commentary`: standings-driven flavor quotes

pub mod commentary;
pub mod constants;
pub mod race_sim;

pub use commentary::{generate_commentary, DriverComment, Tone};
pub use race_sim::simulate_race;
