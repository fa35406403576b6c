//! Championship entity model
//!
//! - `Driver`: attributes, season counters, career ledger, achievements
//! - `Team`: constructor roster and season total
//! - `Circuit`: calendar entry with its focus factor
//! - Race output records handed to the presentation layer

pub mod circuit;
pub mod driver;
pub mod race_result;
pub mod team;

pub use circuit::Circuit;
pub use driver::{
    Achievement, AttributeKind, Attributes, AwardKind, CareerStats, Driver, DriverCategory,
    SeasonStats,
};
pub use race_result::{FinishStatus, QualifyingRow, RaceOutcome, RaceRow};
pub use team::{Team, TEAM_SIZE};
