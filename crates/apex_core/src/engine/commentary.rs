//! Driver commentary
//!
//! Flavor quotes generated from the gap between a driver's current points
//! rank and their season-start power rank. Pure over its inputs: no driver
//! state is read beyond points, and nothing is mutated. Callable at any point
//! mid-season.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::constants::expectation;
use crate::models::Driver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverComment {
    pub driver: String,
    pub message: String,
    pub tone: Tone,
}

const POSITIVE_QUOTES: [&str; 8] = [
    "What a season so far! We are {diff} places up on expectations.",
    "The team is working wonders, the title is ours to take!",
    "I could not be happier with my form right now.",
    "We surprised everyone, and we are only getting started!",
    "We are running ahead of every prediction.",
    "Everything on track is falling our way.",
    "No pressure, we just keep pushing.",
    "The podiums will keep coming.",
];

const NEGATIVE_QUOTES: [&str; 9] = [
    "A disappointment. We are {diff} places down on expectations.",
    "There are problems with the car.",
    "Bad luck just will not leave us alone.",
    "We have to work much harder.",
    "The DNFs have killed our season.",
    "We never found any consistency.",
    "We made strategic mistakes.",
    "I cannot trust the car right now.",
    "My head is a mess, I need to regroup.",
];

const NEUTRAL_QUOTES: [&str; 5] = [
    "We are exactly where we were expected to be.",
    "The balance of power looks about right.",
    "We keep collecting the points.",
    "We just try not to make mistakes.",
    "A steady season.",
];

fn pick<R: Rng>(pool: &[&str], places: u32, rng: &mut R) -> String {
    // Pools are non-empty constant arrays, so choose() always yields.
    let quote = pool.choose(rng).copied().unwrap_or_default();
    quote.replace("{diff}", &places.to_string())
}

/// One comment per driver, ordered by current standings.
///
/// The current points rank (stable descending sort, ties keep roster order)
/// is compared against the season-start power rank; drivers missing from the
/// snapshot are assumed mid-field.
pub fn generate_commentary<R: Rng>(
    drivers: &[Driver],
    power_rank_map: &HashMap<String, u32>,
    rng: &mut R,
) -> Vec<DriverComment> {
    let mut standings: Vec<&Driver> = drivers.iter().collect();
    standings.sort_by(|a, b| b.season.points.cmp(&a.season.points));

    standings
        .iter()
        .enumerate()
        .map(|(pos, driver)| {
            let current_rank = pos as u32 + 1;
            let expected_rank = power_rank_map
                .get(&driver.name)
                .copied()
                .unwrap_or(expectation::DEFAULT_POWER_RANK);

            let (message, tone) = if current_rank < expected_rank {
                (
                    pick(&POSITIVE_QUOTES, expected_rank - current_rank, rng),
                    Tone::Positive,
                )
            } else if current_rank > expected_rank {
                (
                    pick(&NEGATIVE_QUOTES, current_rank - expected_rank, rng),
                    Tone::Negative,
                )
            } else {
                (pick(&NEUTRAL_QUOTES, 0, rng), Tone::Neutral)
            };

            DriverComment {
                driver: driver.name.clone(),
                message,
                tone,
            }
        })
        .collect()
}
