//! Driver entity: attributes, season counters, career ledger.
//!
//! `overall_power` is a derived value (sum of the four attributes) and is
//! recomputed on every mutation path; nothing reads a stale total.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::data;
use crate::engine::constants::retirement;

/// Identifier for one of the four base attributes.
///
/// Development picks attributes through this enum and the [`Attributes`]
/// accessors; there is no by-name field access anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Speed,
    Handling,
    Braking,
    Intelligence,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Speed,
        AttributeKind::Handling,
        AttributeKind::Braking,
        AttributeKind::Intelligence,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Speed => "Speed",
            AttributeKind::Handling => "Handling",
            AttributeKind::Braking => "Braking",
            AttributeKind::Intelligence => "Intelligence",
        }
    }
}

/// The four base attributes. Nominal range is roughly 3.0..=11.0; development
/// caps growth at 10.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub speed: f32,
    pub handling: f32,
    pub braking: f32,
    pub intelligence: f32,
}

impl Attributes {
    pub fn get(&self, kind: AttributeKind) -> f32 {
        match kind {
            AttributeKind::Speed => self.speed,
            AttributeKind::Handling => self.handling,
            AttributeKind::Braking => self.braking,
            AttributeKind::Intelligence => self.intelligence,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, value: f32) {
        match kind {
            AttributeKind::Speed => self.speed = value,
            AttributeKind::Handling => self.handling = value,
            AttributeKind::Braking => self.braking = value,
            AttributeKind::Intelligence => self.intelligence = value,
        }
    }

    pub fn total(&self) -> f32 {
        self.speed + self.handling + self.braking + self.intelligence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverCategory {
    Veteran,
    Rookie,
}

impl fmt::Display for DriverCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverCategory::Veteran => write!(f, "Veteran"),
            DriverCategory::Rookie => write!(f, "Rookie"),
        }
    }
}

/// Per-season counters, zeroed at every season boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub points: u32,
    pub wins: u32,
    pub poles: u32,
    pub podiums: u32,
    pub dnfs: u32,
}

/// Cumulative career counters; survive retirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerStats {
    pub races: u32,
    pub wins: u32,
    pub poles: u32,
    pub podiums: u32,
    pub dnfs: u32,
    pub titles: u32,
}

/// Season-end honors. The achievement list on a driver is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AwardKind {
    WorldChampion,
    MostWins { count: u32 },
    PoleKing { count: u32 },
    PodiumMonster { count: u32 },
    SafeDriver { dnfs: u32 },
    RisingStar { places_gained: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub year: u32,
    #[serde(flatten)]
    pub award: AwardKind,
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.award {
            AwardKind::WorldChampion => write!(f, "{} World Champion", self.year),
            AwardKind::MostWins { count } => write!(f, "{} Most Wins ({count})", self.year),
            AwardKind::PoleKing { count } => write!(f, "{} Pole King ({count})", self.year),
            AwardKind::PodiumMonster { count } => {
                write!(f, "{} Podium Monster ({count})", self.year)
            }
            AwardKind::SafeDriver { dnfs } => {
                write!(f, "{} Safe Driver ({dnfs} DNF)", self.year)
            }
            AwardKind::RisingStar { places_gained } => {
                write!(f, "{} Rising Star (+{places_gained} places)", self.year)
            }
        }
    }
}

/// A championship driver.
///
/// `team` is a back-reference by name; the [`crate::models::Team`] roster is
/// the owning side of that relationship. Names are unique within the active
/// roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub team: String,
    pub attributes: Attributes,
    pub category: DriverCategory,
    /// Sum of the four attributes; recomputed whenever an attribute changes.
    pub overall_power: f32,
    /// Season count at which the driver retires; drawn once at creation.
    pub retirement_deadline: u32,
    pub seasons_raced: u32,
    /// Dismissal strikes. Accrued in bottom-of-the-table seasons and never
    /// reset, so every strike permanently raises dismissal risk.
    pub bad_season_strikes: u32,
    pub season: SeasonStats,
    pub career: CareerStats,
    pub achievements: Vec<Achievement>,
    /// Win tallies at historic circuits only, for the all-time circuit kings.
    pub historic_wins: HashMap<String, u32>,
}

impl Driver {
    /// Create a driver. Category comes from the static veteran membership
    /// list; the retirement deadline is drawn here and fixed for life.
    pub fn new<R: Rng>(
        name: impl Into<String>,
        team: impl Into<String>,
        attributes: Attributes,
        rng: &mut R,
    ) -> Self {
        let name = name.into();
        let category = if data::VETERANS.contains(&name.as_str()) {
            DriverCategory::Veteran
        } else {
            DriverCategory::Rookie
        };

        let retirement_deadline = if name == data::LONG_SERVICE_DRIVER {
            data::LONG_SERVICE_DEADLINE
        } else {
            match category {
                DriverCategory::Veteran => {
                    rng.gen_range(retirement::VETERAN_DEADLINE_MIN..=retirement::VETERAN_DEADLINE_MAX)
                }
                DriverCategory::Rookie => {
                    rng.gen_range(retirement::ROOKIE_DEADLINE_MIN..=retirement::ROOKIE_DEADLINE_MAX)
                }
            }
        };

        let overall_power = attributes.total();
        Self {
            name,
            team: team.into(),
            attributes,
            category,
            overall_power,
            retirement_deadline,
            seasons_raced: 0,
            bad_season_strikes: 0,
            season: SeasonStats::default(),
            career: CareerStats::default(),
            achievements: Vec::new(),
            historic_wins: HashMap::new(),
        }
    }

    /// Recompute `overall_power` from the current attributes. Must be called
    /// after every attribute mutation.
    pub fn update_overall(&mut self) {
        self.overall_power = self.attributes.total();
    }

    pub fn add_points(&mut self, points: u32) {
        self.season.points += points;
    }

    /// Zero the per-season counters. Does not touch `seasons_raced`; the
    /// season transition increments that for surviving drivers only.
    pub fn reset_for_new_season(&mut self) {
        self.season = SeasonStats::default();
    }

    pub fn has_mastery(&self, circuit: &str) -> bool {
        data::has_mastery(&self.name, circuit)
    }

    pub fn record_historic_win(&mut self, circuit: &str) {
        *self.historic_wins.entry(circuit.to_string()).or_insert(0) += 1;
    }

    pub fn historic_wins_at(&self, circuit: &str) -> u32 {
        self.historic_wins.get(circuit).copied().unwrap_or(0)
    }

    /// Career finish rate as a percentage. A driver with zero career races
    /// reports 0.0 rather than dividing by zero.
    pub fn finish_rate(&self) -> f32 {
        if self.career.races == 0 {
            return 0.0;
        }
        (self.career.races - self.career.dnfs) as f32 / self.career.races as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn flat(v: f32) -> Attributes {
        Attributes {
            speed: v,
            handling: v,
            braking: v,
            intelligence: v,
        }
    }

    #[test]
    fn overall_power_tracks_attribute_changes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut d = Driver::new("Testa", "Crimson", flat(5.0), &mut rng);
        assert_eq!(d.overall_power, 20.0);

        d.attributes.set(AttributeKind::Speed, 7.5);
        d.update_overall();
        assert_eq!(d.overall_power, 22.5);
    }

    #[test]
    fn category_from_membership_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let veteran = Driver::new("Vance", "Crimson", flat(9.0), &mut rng);
        assert_eq!(veteran.category, DriverCategory::Veteran);
        let rookie = Driver::new("Nobody", "Crimson", flat(5.0), &mut rng);
        assert_eq!(rookie.category, DriverCategory::Rookie);
    }

    #[test]
    fn long_service_driver_has_fixed_deadline() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let d = Driver::new("Severin", "Cobalt", flat(8.0), &mut rng);
            assert_eq!(d.retirement_deadline, 7);
        }
    }

    #[test]
    fn deadline_windows_by_category() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let veteran = Driver::new("Kellan", "Amber", flat(8.0), &mut rng);
            assert!((5..=8).contains(&veteran.retirement_deadline));
            let rookie = Driver::new("Fresh", "Amber", flat(5.0), &mut rng);
            assert!((9..=11).contains(&rookie.retirement_deadline));
        }
    }

    #[test]
    fn finish_rate_zero_races() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let d = Driver::new("Testa", "Violet", flat(5.0), &mut rng);
        assert_eq!(d.finish_rate(), 0.0);
    }

    #[test]
    fn finish_rate_counts_dnfs() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut d = Driver::new("Testa", "Violet", flat(5.0), &mut rng);
        d.career.races = 20;
        d.career.dnfs = 5;
        assert!((d.finish_rate() - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn achievement_display() {
        let a = Achievement {
            year: 2025,
            award: AwardKind::MostWins { count: 4 },
        };
        assert_eq!(a.to_string(), "2025 Most Wins (4)");
    }
}
