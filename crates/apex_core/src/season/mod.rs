//! Season lifecycle
//!
//! Everything that happens between the last race of a season and the first
//! race of the next: award resolution, driver development, retirement and
//! dismissal, seat replacement and the per-season reset.

pub mod awards;
pub mod development;
pub mod rookie_pool;
pub mod transition;

pub use awards::{distribute_season_awards, HallOfFameEntry};
pub use development::{apply_season_development, DevelopmentChange};
pub use rookie_pool::{RookieCandidate, RookiePool};
pub use transition::{advance_season, ExitReason, SeasonReport};
