//! Tuning constants for the championship simulation
//!
//! Grouped by concern. Probabilities are f64 (compared against a raw RNG
//! draw); power and score math is f32 like the rest of the engine.

// ============================================================
// Scoring
// ============================================================
pub mod scoring {
    /// Classified places that receive a points allocation. Place 10 is
    /// deliberately worth zero: it appears in the scored table but pays
    /// nothing.
    pub const SCORED_PLACES: u32 = 10;

    /// Top finishing places credited with a podium.
    pub const PODIUM_PLACES: u32 = 3;

    /// Championship points by finishing rank (1-based).
    pub fn points_for_rank(rank: u32) -> u32 {
        match rank {
            1 => 15,
            2 => 12,
            3 => 10,
            4 => 8,
            5 => 6,
            6 => 4,
            7 => 3,
            8 => 2,
            9 => 1,
            _ => 0,
        }
    }
}

// ============================================================
// Weather
// ============================================================
pub mod weather {
    /// Chance of a wet race.
    pub const RAIN_CHANCE: f64 = 0.20;

    /// Wet-race multiplier applied to handling and intelligence for the
    /// duration of the race only; stored attributes are never mutated.
    pub const RAIN_MULTIPLIER: f32 = 1.25;
}

// ============================================================
// Reliability (DNF model)
// ============================================================
pub mod reliability {
    /// Reference attribute total for the DNF model (four attributes at a
    /// nominal maximum of 10.5 apiece stay just under this).
    pub const MAX_POWER: f32 = 42.0;

    /// Floor term of the DNF probability.
    pub const BASE_DNF_CHANCE: f64 = 0.01;

    /// Weight of the power deficit term: weaker machinery breaks more.
    pub const POWER_INFLUENCE: f64 = 0.30;

    /// Weight of the circuit term: focus factors above 1.0 add risk, below
    /// 1.0 subtract it.
    pub const CIRCUIT_DNF_INFLUENCE: f64 = 0.20;
}

// ============================================================
// Pace model
// ============================================================
pub mod pace {
    /// Flat power bonus at a mastered circuit (qualifying and race).
    pub const MASTERY_BOOST: f32 = 3.0;

    /// Flat race-power bonus for the pole sitter.
    pub const POLE_BOOST: f32 = 5.0;

    /// Qualifying weighs raw power slightly down before noise is added.
    pub const QUALY_POWER_MULTIPLIER: f32 = 0.9;

    /// Qualifying noise half-range before the circuit focus factor scales it.
    pub const QUALY_CHAOS_BASE: f32 = 5.0;

    /// Race noise half-range before the circuit focus factor scales it.
    pub const RACE_CHAOS_BASE: f32 = 12.0;
}

// ============================================================
// Season development
// ============================================================
pub mod development {
    /// Attributes a rookie improves each off-season.
    pub const ROOKIE_ATTRS_PER_SEASON: usize = 2;

    pub const ROOKIE_BOOST_MIN: f32 = 0.3;
    pub const ROOKIE_BOOST_MAX: f32 = 0.8;

    /// No attribute develops past this ceiling.
    pub const ATTRIBUTE_CEILING: f32 = 10.5;

    /// Veteran roll bands: below the first threshold the attribute declines,
    /// above the second it improves, the band between is a quiet off-season.
    pub const VETERAN_DECLINE_BAND: f64 = 0.35;
    pub const VETERAN_IMPROVE_BAND: f64 = 0.85;

    pub const VETERAN_DECLINE_MIN: f32 = 0.1;
    pub const VETERAN_DECLINE_MAX: f32 = 0.3;
    pub const VETERAN_IMPROVE_MIN: f32 = 0.1;
    pub const VETERAN_IMPROVE_MAX: f32 = 0.2;

    /// A veteran attribute never declines below this floor; a decline that
    /// would cross it is suppressed entirely, not clamped.
    pub const VETERAN_ATTRIBUTE_FLOOR: f32 = 4.0;
}

// ============================================================
// Retirement
// ============================================================
pub mod retirement {
    pub const VETERAN_DEADLINE_MIN: u32 = 5;
    pub const VETERAN_DEADLINE_MAX: u32 = 8;
    pub const ROOKIE_DEADLINE_MIN: u32 = 9;
    pub const ROOKIE_DEADLINE_MAX: u32 = 11;
}

// ============================================================
// Dismissal review
// ============================================================
pub mod dismissal {
    /// Only the bottom drivers of the standings are reviewed.
    pub const REVIEW_WINDOW: usize = 3;

    /// Point gap to the next-higher driver that earns a strike.
    pub const POINT_GAP_STRIKE: u32 = 25;

    /// Finishing this many places (or more) below the season-start power
    /// rank earns a strike.
    pub const EXPECTATION_SLACK: u32 = 3;

    /// Strikes for scoring nothing while finishing dead last; replaces the
    /// gap and expectation checks for that driver.
    pub const DEAD_LAST_STRIKES: u32 = 2;

    /// Cumulative strikes that trigger dismissal. Strikes never reset.
    pub const STRIKE_LIMIT: u32 = 2;
}

// ============================================================
// Expectation baseline
// ============================================================
pub mod expectation {
    /// Power rank assumed for a driver missing from the season-start
    /// snapshot (a mid-cycle hire).
    pub const DEFAULT_POWER_RANK: u32 = 5;
}
