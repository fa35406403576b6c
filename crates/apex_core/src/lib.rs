//! # apex_core - Deterministic Racing Championship Simulation Engine
//!
//! This library simulates a multi-season racing championship: drivers and
//! teams compete across a rotating calendar, accumulating points, titles and
//! records, with procedural driver progression, retirement and roster
//! replacement between seasons.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Race weekends: qualifying, weather, reliability, classification
//! - Season lifecycle: awards, development, retirement, dismissal, intake
//! - All-time record keeping across active and archived drivers
//! - JSON API for easy integration with host applications
//!
//! The core holds no ambient globals: every operation works on an explicit
//! [`ChampionshipState`] plus an injected RNG, so hosts control both the
//! state lifecycle and the randomness.

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod season;
pub mod state;

// Re-export main API functions
pub use api::{generate_commentary_json, simulate_race_json};
pub use error::{Result, SimError};

// Re-export the entity model
pub use models::{
    Achievement, AttributeKind, Attributes, AwardKind, CareerStats, Circuit, Driver,
    DriverCategory, FinishStatus, QualifyingRow, RaceOutcome, RaceRow, SeasonStats, Team,
    TEAM_SIZE,
};

// Re-export the engine surface
pub use engine::{generate_commentary, simulate_race, DriverComment, Tone};

// Re-export the season lifecycle
pub use season::{
    advance_season, apply_season_development, distribute_season_awards, DevelopmentChange,
    ExitReason, HallOfFameEntry, RookieCandidate, RookiePool, SeasonReport,
};

// Re-export state management
pub use state::{CareerRecordRow, ChampionshipState, HistoricKings};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
