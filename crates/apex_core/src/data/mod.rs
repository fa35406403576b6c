//! Embedded championship data
//!
//! Fixed data tables the simulation is seeded from:
//! - Base driver grid and team names
//! - Circuit set with focus factors
//! - Veteran membership and the long-service deadline exception
//! - Historic circuits and their honorary titles
//! - Per-driver circuit mastery
//! - Initial rookie intake queue

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::driver::Attributes;

/// Drivers whose careers predate the championship; everyone else enters as a
/// rookie. Membership is fixed at creation and never re-evaluated.
pub const VETERANS: [&str; 4] = ["Vance", "Dorian", "Kellan", "Ruben"];

/// Severin negotiated a fixed seven-season contract horizon; his retirement
/// deadline ignores the usual category draw.
pub const LONG_SERVICE_DRIVER: &str = "Severin";
pub const LONG_SERVICE_DEADLINE: u32 = 7;

/// Base grid: name and the four attributes (speed, handling, braking,
/// intelligence). Team assignment is shuffled at session creation.
pub const BASE_GRID: [(&str, f32, f32, f32, f32); 10] = [
    ("Vance", 10.0, 9.0, 9.0, 9.0),
    ("Dorian", 10.0, 8.0, 9.0, 9.0),
    ("Kellan", 10.0, 8.0, 8.0, 8.0),
    ("Severin", 9.0, 7.0, 8.0, 9.0),
    ("Ruben", 8.0, 7.0, 8.0, 8.0),
    ("Matteo", 6.0, 6.0, 7.0, 7.0),
    ("Felix", 6.0, 6.0, 6.0, 5.0),
    ("Iwan", 6.0, 4.0, 5.0, 4.0),
    ("Corvin", 5.0, 5.0, 5.0, 4.0),
    ("Livia", 4.0, 4.0, 4.0, 5.0),
];

pub const TEAM_NAMES: [&str; 5] = ["Crimson", "Cobalt", "Amber", "Verdant", "Violet"];

/// Circuit set: name and focus factor. The focus factor scales both random
/// variance and DNF risk at that circuit.
pub const CIRCUITS: [(&str, f32); 20] = [
    ("Ardenwood", 1.2),
    ("Valverde Park", 1.1),
    ("Bayfront", 1.0),
    ("Kingsmoor", 0.9),
    ("Cascata Ridge", 1.3),
    ("Montefalco", 0.8),
    ("Marina Vale", 0.8),
    ("Port Royale", 1.4),
    ("Yatsumi", 1.1),
    ("Southbridge", 1.0),
    ("Old Harbor", 1.3),
    ("Duneside", 0.9),
    ("Ile Noire", 1.1),
    ("Jinhu", 1.0),
    ("Lantern Bay", 1.4),
    ("Sierra Alta", 0.9),
    ("Caliche Hills", 1.0),
    ("Seawall", 1.2),
    ("Parkline", 0.8),
    ("Alpenring", 0.9),
];

/// Historic circuits carry an honorary title for their record holder. Wins at
/// these circuits are tallied per driver for the all-time "circuit kings"
/// records.
pub static HISTORIC_CIRCUIT_TITLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Ardenwood", "King of the Rain-Swept Straights"),
        ("Kingsmoor", "Keeper of the Old Airfield"),
        ("Valverde Park", "The Last Rain Bender"),
        ("Port Royale", "The Street Virtuoso"),
        ("Montefalco", "Master of the Temple of Speed"),
    ])
});

/// Static per-driver mastery lists: circuits where the driver receives the
/// fixed mastery power bonus in qualifying and the race.
pub static CIRCUIT_MASTERY: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("Dorian", vec!["Ardenwood", "Lantern Bay", "Yatsumi"]),
        ("Vance", vec!["Kingsmoor", "Cascata Ridge", "Valverde Park"]),
        ("Severin", vec!["Southbridge"]),
        ("Ruben", vec!["Old Harbor"]),
        ("Kellan", vec!["Bayfront"]),
    ])
});

/// Initial rookie intake: candidates consumed front-first when a seat opens.
pub const INITIAL_ROOKIE_INTAKE: [(&str, f32, f32, f32, f32); 7] = [
    ("Tobias", 6.0, 5.0, 6.0, 5.0),
    ("Anders", 5.0, 5.0, 5.0, 5.0),
    ("Nikolai", 6.0, 4.0, 5.0, 5.0),
    ("Jasper", 4.0, 5.0, 4.0, 6.0),
    ("Emil", 5.0, 5.0, 4.0, 6.0),
    ("Dario", 6.0, 6.0, 6.0, 7.0),
    ("Lennart", 4.0, 4.0, 5.0, 3.0),
];

/// True when `driver` holds a mastery of `circuit`.
pub fn has_mastery(driver: &str, circuit: &str) -> bool {
    CIRCUIT_MASTERY
        .get(driver)
        .map(|tracks| tracks.iter().any(|t| *t == circuit))
        .unwrap_or(false)
}

/// True when wins at `circuit` count toward the historic records.
pub fn is_historic_circuit(circuit: &str) -> bool {
    HISTORIC_CIRCUIT_TITLES.contains_key(circuit)
}

pub fn attributes_from_tuple(t: &(&str, f32, f32, f32, f32)) -> Attributes {
    Attributes {
        speed: t.1,
        handling: t.2,
        braking: t.3,
        intelligence: t.4,
    }
}
