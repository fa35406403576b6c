//! Off-season driver development
//!
//! Rookies improve two random attributes; veterans roll one attribute through
//! decline/quiet/improve bands. The 10.5 ceiling trims rookie boosts, while
//! veteran changes that would cross a bound are suppressed entirely (the
//! attribute is left exactly as it was, not clamped to the bound).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::constants::development;
use crate::models::{AttributeKind, Driver, DriverCategory};

/// One driver's off-season report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentChange {
    pub driver: String,
    pub category: DriverCategory,
    pub summary: String,
    pub new_power: f32,
}

/// Mutate `driver`'s attributes for the off-season and recompute the derived
/// power total. Returns a human-readable summary of what changed.
pub fn apply_season_development<R: Rng>(driver: &mut Driver, rng: &mut R) -> String {
    let mut changes: Vec<String> = Vec::new();

    match driver.category {
        DriverCategory::Rookie => {
            let targets: Vec<AttributeKind> = AttributeKind::ALL
                .choose_multiple(rng, development::ROOKIE_ATTRS_PER_SEASON)
                .copied()
                .collect();
            for kind in targets {
                let mut boost =
                    rng.gen_range(development::ROOKIE_BOOST_MIN..development::ROOKIE_BOOST_MAX);
                let current = driver.attributes.get(kind);
                // Trim the boost at the ceiling; it shrinks but never flips sign.
                if current + boost > development::ATTRIBUTE_CEILING {
                    boost = development::ATTRIBUTE_CEILING - current;
                }
                driver.attributes.set(kind, current + boost);
                changes.push(format!("{} +{boost:.1}", kind.label()));
            }
        }
        DriverCategory::Veteran => {
            let roll = rng.gen::<f64>();
            // Pools are non-empty, so choose() always yields.
            let kind = *AttributeKind::ALL.choose(rng).unwrap_or(&AttributeKind::Speed);
            let current = driver.attributes.get(kind);

            if roll < development::VETERAN_DECLINE_BAND {
                let mut drop = rng
                    .gen_range(development::VETERAN_DECLINE_MIN..development::VETERAN_DECLINE_MAX);
                if current - drop < development::VETERAN_ATTRIBUTE_FLOOR {
                    drop = 0.0;
                }
                driver.attributes.set(kind, current - drop);
                changes.push(format!("{} -{drop:.1}", kind.label()));
            } else if roll > development::VETERAN_IMPROVE_BAND {
                let mut boost = rng
                    .gen_range(development::VETERAN_IMPROVE_MIN..development::VETERAN_IMPROVE_MAX);
                if current + boost > development::ATTRIBUTE_CEILING {
                    boost = 0.0;
                }
                driver.attributes.set(kind, current + boost);
                changes.push(format!("{} +{boost:.1}", kind.label()));
            } else {
                changes.push("no change".to_string());
            }
        }
    }

    driver.update_overall();
    changes.join(", ")
}
