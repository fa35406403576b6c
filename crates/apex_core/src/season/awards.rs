//! Season-end award resolution
//!
//! Appends achievement entries to driver histories from the final standings
//! and the season-start power-rank snapshot. Not idempotent: a second call
//! duplicates every award, so the season transition calls it exactly once.
//!
//! Tie handling: every driver tied at the relevant maximum (or minimum, for
//! the safest-driver award) shares the award. The champion is the single top
//! entry of the stable points sort.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::constants::expectation;
use crate::error::{Result, SimError};
use crate::models::{Achievement, AwardKind, Driver};

/// Hall-of-fame ledger entry, recorded once per season by the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    pub year: u32,
    pub champion: String,
    pub team: String,
    pub points: u32,
}

/// Indices of `drivers` in standings order: stable descending sort on season
/// points, so tied drivers keep roster order.
pub fn standings_order(drivers: &[Driver]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..drivers.len()).collect();
    order.sort_by(|&a, &b| drivers[b].season.points.cmp(&drivers[a].season.points));
    order
}

fn power_rank(power_rank_map: &HashMap<String, u32>, name: &str) -> u32 {
    power_rank_map
        .get(name)
        .copied()
        .unwrap_or(expectation::DEFAULT_POWER_RANK)
}

/// Resolve and append all season-end awards.
///
/// The champion additionally gains a career title. The safest-driver award is
/// the one superlative with no positivity gate: it is handed out even when
/// the minimum DNF count is zero.
pub fn distribute_season_awards(
    drivers: &mut [Driver],
    power_rank_map: &HashMap<String, u32>,
    year: u32,
) -> Result<HallOfFameEntry> {
    if drivers.is_empty() {
        return Err(SimError::EmptyRoster);
    }

    let order = standings_order(drivers);

    let champion_idx = order[0];
    drivers[champion_idx].achievements.push(Achievement {
        year,
        award: AwardKind::WorldChampion,
    });
    drivers[champion_idx].career.titles += 1;
    let ledger = HallOfFameEntry {
        year,
        champion: drivers[champion_idx].name.clone(),
        team: drivers[champion_idx].team.clone(),
        points: drivers[champion_idx].season.points,
    };

    let max_wins = drivers.iter().map(|d| d.season.wins).max().unwrap_or(0);
    if max_wins > 0 {
        for d in drivers.iter_mut().filter(|d| d.season.wins == max_wins) {
            d.achievements.push(Achievement {
                year,
                award: AwardKind::MostWins { count: max_wins },
            });
        }
    }

    let max_poles = drivers.iter().map(|d| d.season.poles).max().unwrap_or(0);
    if max_poles > 0 {
        for d in drivers.iter_mut().filter(|d| d.season.poles == max_poles) {
            d.achievements.push(Achievement {
                year,
                award: AwardKind::PoleKing { count: max_poles },
            });
        }
    }

    let max_podiums = drivers.iter().map(|d| d.season.podiums).max().unwrap_or(0);
    if max_podiums > 0 {
        for d in drivers
            .iter_mut()
            .filter(|d| d.season.podiums == max_podiums)
        {
            d.achievements.push(Achievement {
                year,
                award: AwardKind::PodiumMonster {
                    count: max_podiums,
                },
            });
        }
    }

    let min_dnfs = drivers.iter().map(|d| d.season.dnfs).min().unwrap_or(0);
    for d in drivers.iter_mut().filter(|d| d.season.dnfs == min_dnfs) {
        d.achievements.push(Achievement {
            year,
            award: AwardKind::SafeDriver { dnfs: min_dnfs },
        });
    }

    // Biggest riser: positive (power rank − points rank) means the driver
    // finished better than their machinery predicted.
    let mut best_gain = i64::MIN;
    let mut risers: Vec<usize> = Vec::new();
    for (pos, &idx) in order.iter().enumerate() {
        let points_rank = pos as i64 + 1;
        let gain = power_rank(power_rank_map, &drivers[idx].name) as i64 - points_rank;
        if gain > best_gain {
            best_gain = gain;
            risers = vec![idx];
        } else if gain == best_gain {
            risers.push(idx);
        }
    }
    if best_gain > 0 {
        for idx in risers {
            drivers[idx].achievements.push(Achievement {
                year,
                award: AwardKind::RisingStar {
                    places_gained: best_gain as u32,
                },
            });
        }
    }

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attributes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn driver(name: &str, rng: &mut ChaCha8Rng) -> Driver {
        Driver::new(
            name,
            "Crimson",
            Attributes {
                speed: 5.0,
                handling: 5.0,
                braking: 5.0,
                intelligence: 5.0,
            },
            rng,
        )
    }

    fn awards_of(d: &Driver) -> Vec<&AwardKind> {
        d.achievements.iter().map(|a| &a.award).collect()
    }

    #[test]
    fn empty_roster_is_an_error() {
        let mut none: Vec<Driver> = Vec::new();
        assert!(matches!(
            distribute_season_awards(&mut none, &HashMap::new(), 2025),
            Err(SimError::EmptyRoster)
        ));
    }

    #[test]
    fn two_driver_award_sheet() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut a = driver("A", &mut rng);
        a.season.points = 30;
        a.season.wins = 2;
        a.season.poles = 1;
        a.season.podiums = 2;
        a.season.dnfs = 0;
        let mut b = driver("B", &mut rng);
        b.season.points = 10;
        b.season.wins = 0;
        b.season.poles = 2;
        b.season.podiums = 0;
        b.season.dnfs = 1;
        let mut drivers = vec![a, b];

        let ledger =
            distribute_season_awards(&mut drivers, &HashMap::new(), 2025).unwrap();
        assert_eq!(ledger.champion, "A");
        assert_eq!(ledger.points, 30);

        let a_awards = awards_of(&drivers[0]);
        assert!(a_awards.contains(&&AwardKind::WorldChampion));
        assert!(a_awards.contains(&&AwardKind::MostWins { count: 2 }));
        assert!(a_awards.contains(&&AwardKind::PodiumMonster { count: 2 }));
        assert!(a_awards.contains(&&AwardKind::SafeDriver { dnfs: 0 }));
        assert_eq!(drivers[0].career.titles, 1);

        let b_awards = awards_of(&drivers[1]);
        assert!(b_awards.contains(&&AwardKind::PoleKing { count: 2 }));
        assert!(!b_awards.contains(&&AwardKind::MostWins { count: 0 }));
        assert!(!b_awards.iter().any(|k| matches!(k, AwardKind::SafeDriver { .. })));
    }

    #[test]
    fn zero_maximum_gates_all_but_safest() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let mut drivers = vec![driver("A", &mut rng), driver("B", &mut rng)];
        distribute_season_awards(&mut drivers, &HashMap::new(), 2025).unwrap();

        // Nobody won, poled or podiumed; only the champion title and the
        // ungated safest award appear.
        for d in &drivers {
            assert!(!awards_of(d).iter().any(|k| matches!(
                k,
                AwardKind::MostWins { .. } | AwardKind::PoleKing { .. } | AwardKind::PodiumMonster { .. }
            )));
            assert!(awards_of(d)
                .iter()
                .any(|k| matches!(k, AwardKind::SafeDriver { dnfs: 0 })));
        }
    }

    #[test]
    fn ties_share_awards() {
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        let mut a = driver("A", &mut rng);
        a.season.wins = 3;
        let mut b = driver("B", &mut rng);
        b.season.wins = 3;
        let mut drivers = vec![a, b];
        distribute_season_awards(&mut drivers, &HashMap::new(), 2026).unwrap();
        for d in &drivers {
            assert!(awards_of(d).contains(&&AwardKind::MostWins { count: 3 }));
        }
    }

    #[test]
    fn biggest_riser_requires_positive_gain() {
        let mut rng = ChaCha8Rng::seed_from_u64(34);
        let mut a = driver("A", &mut rng);
        a.season.points = 50;
        let mut b = driver("B", &mut rng);
        b.season.points = 20;
        let mut drivers = vec![a, b];

        // Snapshot matches the final order exactly: no positive gain, no award.
        let map = HashMap::from([("A".to_string(), 1), ("B".to_string(), 2)]);
        distribute_season_awards(&mut drivers, &map, 2025).unwrap();
        assert!(!drivers.iter().any(|d| awards_of(d)
            .iter()
            .any(|k| matches!(k, AwardKind::RisingStar { .. }))));

        // B was expected 4th (power) but finished 2nd: +2 places.
        let map = HashMap::from([("A".to_string(), 1), ("B".to_string(), 4)]);
        distribute_season_awards(&mut drivers, &map, 2026).unwrap();
        assert!(awards_of(&drivers[1])
            .contains(&&AwardKind::RisingStar { places_gained: 2 }));
        assert!(!awards_of(&drivers[0])
            .iter()
            .any(|k| matches!(k, AwardKind::RisingStar { .. })));
    }

    #[test]
    fn calling_twice_duplicates_awards() {
        // Documented non-idempotence: the transition must call exactly once.
        let mut rng = ChaCha8Rng::seed_from_u64(35);
        let mut drivers = vec![driver("A", &mut rng)];
        distribute_season_awards(&mut drivers, &HashMap::new(), 2025).unwrap();
        distribute_season_awards(&mut drivers, &HashMap::new(), 2025).unwrap();
        let champion_awards = drivers[0]
            .achievements
            .iter()
            .filter(|a| matches!(a.award, AwardKind::WorldChampion))
            .count();
        assert_eq!(champion_awards, 2);
        assert_eq!(drivers[0].career.titles, 2);
    }
}
