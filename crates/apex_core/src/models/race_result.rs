//! Race output records
//!
//! These structures are the sink of one `simulate_race` call and the boundary
//! handed to the presentation layer: classified rows, the qualifying sheet,
//! the weather, the winner and the pole sitter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishStatus {
    Finished,
    Dnf,
}

/// One classified row. DNF rows carry no rank and zero points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRow {
    pub rank: Option<u32>,
    pub driver: String,
    pub team: String,
    pub points: u32,
    pub status: FinishStatus,
}

/// One qualifying sheet row; `score` is the noisy weighted power used for
/// grid ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingRow {
    pub rank: u32,
    pub driver: String,
    pub score: f32,
}

/// Full record of one race. Counter side effects have already been applied to
/// the drivers when this is returned; there is no separate commit step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceOutcome {
    pub circuit: String,
    pub rainy: bool,
    pub log: Vec<String>,
    pub classification: Vec<RaceRow>,
    pub qualifying: Vec<QualifyingRow>,
    /// None when every driver failed to finish.
    pub winner: Option<String>,
    pub pole_sitter: String,
}

impl RaceOutcome {
    /// Total championship points awarded in this race.
    pub fn points_awarded(&self) -> u32 {
        self.classification.iter().map(|row| row.points).sum()
    }
}
