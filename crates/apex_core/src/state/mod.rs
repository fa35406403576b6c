//! Championship session state
//!
//! [`ChampionshipState`] is the explicit simulation-state value every core
//! operation works on. The core keeps no ambient globals: the host owns the
//! state and passes it (with an RNG) into each command.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::data;
use crate::engine::race_sim::simulate_race;
use crate::error::{Result, SimError};
use crate::models::{Circuit, Driver, RaceOutcome, Team, TEAM_SIZE};
use crate::season::awards::HallOfFameEntry;
use crate::season::development::DevelopmentChange;
use crate::season::rookie_pool::RookiePool;

/// Record holders of one historic circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricKings {
    pub circuit: String,
    pub title: String,
    pub leaders: Vec<String>,
    pub wins: u32,
}

/// One row of an all-time career record table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecordRow {
    pub rank: u32,
    pub driver: String,
    pub team: String,
    pub value: u32,
}

/// Full mutable state of one running championship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipState {
    pub year: u32,
    /// Active roster. Names are unique; each driver's `team` back-reference
    /// matches exactly one [`Team`] roster entry.
    pub drivers: Vec<Driver>,
    /// Archived retirees and dismissals; career data frozen but queryable.
    pub retired: Vec<Driver>,
    pub teams: Vec<Team>,
    /// This season's calendar in running order; reshuffled every transition.
    pub circuits: Vec<Circuit>,
    pub race_index: usize,
    /// Season-start snapshot: driver name → rank by overall power (1 = best).
    pub power_rank_map: HashMap<String, u32>,
    pub hall_of_fame: Vec<HallOfFameEntry>,
    pub rookie_pool: RookiePool,
    pub race_history: Vec<RaceOutcome>,
    /// (circuit, winner) per completed race this season.
    pub season_winners: Vec<(String, String)>,
    /// (circuit, pole sitter) per completed race this season.
    pub season_poles: Vec<(String, String)>,
    /// Most recent winner per circuit, carried across seasons.
    pub track_winners: HashMap<String, String>,
    /// Points time series per active driver; starts at a single zero entry
    /// and grows by one entry per race.
    pub points_history: HashMap<String, Vec<u32>>,
    /// News log from the most recent season transition.
    pub transfer_log: Vec<String>,
    /// Development report from the most recent season transition.
    pub development_log: Vec<DevelopmentChange>,
}

impl ChampionshipState {
    /// Build a fresh championship from the embedded data tables: shuffled
    /// driver-to-team assignment (two per team), season-start power ranks and
    /// a shuffled calendar.
    pub fn new<R: Rng>(first_year: u32, rng: &mut R) -> Result<Self> {
        let mut drivers: Vec<Driver> = data::BASE_GRID
            .iter()
            .map(|entry| Driver::new(entry.0, "", data::attributes_from_tuple(entry), rng))
            .collect();
        drivers.shuffle(rng);

        let mut teams: Vec<Team> = data::TEAM_NAMES.iter().copied().map(Team::new).collect();
        for (i, driver) in drivers.iter_mut().enumerate() {
            let team = &mut teams[i / TEAM_SIZE];
            driver.team = team.name.clone();
            team.add_driver(driver.name.clone());
        }

        let power_rank_map = compute_power_rank_map(&drivers);
        let mut circuits: Vec<Circuit> = data::CIRCUITS
            .iter()
            .map(|(name, focus)| Circuit::new(*name, *focus))
            .collect();
        circuits.shuffle(rng);

        let points_history = drivers.iter().map(|d| (d.name.clone(), vec![0])).collect();

        let state = Self {
            year: first_year,
            drivers,
            retired: Vec::new(),
            teams,
            circuits,
            race_index: 0,
            power_rank_map,
            hall_of_fame: Vec::new(),
            rookie_pool: RookiePool::initial(),
            race_history: Vec::new(),
            season_winners: Vec::new(),
            season_poles: Vec::new(),
            track_winners: HashMap::new(),
            points_history,
            transfer_log: Vec::new(),
            development_log: Vec::new(),
        };
        state.check_roster_invariants()?;
        Ok(state)
    }

    /// Duplicate names or a mis-sized team roster indicate a logic defect.
    pub fn check_roster_invariants(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for d in &self.drivers {
            if !seen.insert(d.name.as_str()) {
                return Err(SimError::RosterInvariant(format!(
                    "duplicate driver name {} in active roster",
                    d.name
                )));
            }
        }
        for team in &self.teams {
            team.check_roster_invariant()?;
        }
        Ok(())
    }

    pub fn season_complete(&self) -> bool {
        self.race_index >= self.circuits.len()
    }

    pub fn current_circuit(&self) -> Option<&Circuit> {
        self.circuits.get(self.race_index)
    }

    /// Run the next race on the calendar and apply all session bookkeeping:
    /// winner/pole logs, the per-track last-winner map, the points time
    /// series, team totals and the race history.
    pub fn run_next_race<R: Rng>(&mut self, rng: &mut R) -> Result<RaceOutcome> {
        if self.season_complete() {
            return Err(SimError::SeasonComplete(self.circuits.len()));
        }
        let circuit = self.circuits[self.race_index].clone();
        let outcome = simulate_race(&mut self.drivers, &circuit, rng)?;

        if let Some(winner) = &outcome.winner {
            self.season_winners.push((circuit.name.clone(), winner.clone()));
            self.track_winners.insert(circuit.name.clone(), winner.clone());
        }
        self.season_poles
            .push((circuit.name.clone(), outcome.pole_sitter.clone()));

        for d in &self.drivers {
            if let Some(series) = self.points_history.get_mut(&d.name) {
                series.push(d.season.points);
            }
        }
        for team in &mut self.teams {
            team.recompute_points(&self.drivers);
        }

        self.race_history.push(outcome.clone());
        self.race_index += 1;
        Ok(outcome)
    }

    /// Active drivers in standings order (stable sort; ties keep roster order).
    pub fn standings(&self) -> Vec<&Driver> {
        let mut sorted: Vec<&Driver> = self.drivers.iter().collect();
        sorted.sort_by(|a, b| b.season.points.cmp(&a.season.points));
        sorted
    }

    /// Teams in standings order.
    pub fn team_standings(&self) -> Vec<&Team> {
        let mut sorted: Vec<&Team> = self.teams.iter().collect();
        sorted.sort_by(|a, b| b.season_points.cmp(&a.season_points));
        sorted
    }

    /// Active and archived drivers together, for all-time records.
    pub fn all_drivers_ever(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter().chain(self.retired.iter())
    }

    /// Top `n` drivers of all time by a career counter, descending.
    pub fn career_top(&self, n: usize, value: fn(&Driver) -> u32) -> Vec<CareerRecordRow> {
        let mut all: Vec<&Driver> = self.all_drivers_ever().collect();
        all.sort_by(|a, b| value(b).cmp(&value(a)));
        all.iter()
            .take(n)
            .enumerate()
            .map(|(i, d)| CareerRecordRow {
                rank: i as u32 + 1,
                driver: d.name.clone(),
                team: d.team.clone(),
                value: value(d),
            })
            .collect()
    }

    /// Fewest career DNFs among drivers with at least `min_races` starts,
    /// ascending.
    pub fn career_safest(&self, n: usize, min_races: u32) -> Vec<CareerRecordRow> {
        let mut eligible: Vec<&Driver> = self
            .all_drivers_ever()
            .filter(|d| d.career.races >= min_races)
            .collect();
        eligible.sort_by(|a, b| a.career.dnfs.cmp(&b.career.dnfs));
        eligible
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, d)| CareerRecordRow {
                rank: i as u32 + 1,
                driver: d.name.clone(),
                team: d.team.clone(),
                value: d.career.dnfs,
            })
            .collect()
    }

    /// Record holders per historic circuit across active and archived
    /// drivers. A circuit with no wins yet has no kings.
    pub fn historic_kings(&self) -> Vec<HistoricKings> {
        let mut boards: Vec<HistoricKings> = Vec::new();
        for (circuit, title) in data::HISTORIC_CIRCUIT_TITLES.iter() {
            let mut max_wins = 0;
            let mut leaders: Vec<String> = Vec::new();
            for d in self.all_drivers_ever() {
                let wins = d.historic_wins_at(circuit);
                if wins > max_wins {
                    max_wins = wins;
                    leaders = vec![d.name.clone()];
                } else if wins == max_wins && wins > 0 {
                    leaders.push(d.name.clone());
                }
            }
            boards.push(HistoricKings {
                circuit: circuit.to_string(),
                title: title.to_string(),
                leaders,
                wins: max_wins,
            });
        }
        boards.sort_by(|a, b| a.circuit.cmp(&b.circuit));
        boards
    }
}

/// Rank every driver by `overall_power`, 1 = strongest; stable sort, ties
/// keep roster order.
pub fn compute_power_rank_map(drivers: &[Driver]) -> HashMap<String, u32> {
    let mut order: Vec<usize> = (0..drivers.len()).collect();
    order.sort_by(|&a, &b| {
        drivers[b]
            .overall_power
            .partial_cmp(&drivers[a].overall_power)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .iter()
        .enumerate()
        .map(|(rank, &idx)| (drivers[idx].name.clone(), rank as u32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fresh_state_satisfies_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = ChampionshipState::new(2025, &mut rng).unwrap();
        assert_eq!(state.drivers.len(), 10);
        assert_eq!(state.teams.len(), 5);
        assert!(state.teams.iter().all(|t| t.drivers.len() == TEAM_SIZE));
        assert_eq!(state.circuits.len(), 20);
        assert_eq!(state.power_rank_map.len(), 10);
        assert!(state
            .points_history
            .values()
            .all(|series| series == &vec![0]));
    }

    #[test]
    fn power_rank_map_is_one_based_and_orders_by_power() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let state = ChampionshipState::new(2025, &mut rng).unwrap();
        let ranks: Vec<u32> = {
            let mut r: Vec<u32> = state.power_rank_map.values().copied().collect();
            r.sort_unstable();
            r
        };
        assert_eq!(ranks, (1..=10).collect::<Vec<u32>>());

        // The strongest base-grid driver tops the snapshot.
        let strongest = state
            .drivers
            .iter()
            .max_by(|a, b| a.overall_power.partial_cmp(&b.overall_power).unwrap())
            .unwrap();
        assert_eq!(state.power_rank_map[&strongest.name], 1);
    }

    #[test]
    fn run_next_race_advances_the_calendar_and_updates_bookkeeping() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = ChampionshipState::new(2025, &mut rng).unwrap();
        state.run_next_race(&mut rng).unwrap();

        assert_eq!(state.race_index, 1);
        assert_eq!(state.race_history.len(), 1);
        assert_eq!(state.season_poles.len(), 1);
        assert!(state
            .points_history
            .values()
            .all(|series| series.len() == 2));

        let driver_total: u32 = state.drivers.iter().map(|d| d.season.points).sum();
        let team_total: u32 = state.teams.iter().map(|t| t.season_points).sum();
        assert_eq!(driver_total, team_total);
    }

    #[test]
    fn running_past_the_calendar_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut state = ChampionshipState::new(2025, &mut rng).unwrap();
        for _ in 0..state.circuits.len() {
            state.run_next_race(&mut rng).unwrap();
        }
        assert!(matches!(
            state.run_next_race(&mut rng),
            Err(SimError::SeasonComplete(20))
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut state = ChampionshipState::new(2025, &mut rng).unwrap();
        let clone = state.drivers[0].clone();
        state.drivers.push(clone);
        assert!(state.check_roster_invariants().is_err());
    }

    #[test]
    fn historic_kings_empty_before_any_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let state = ChampionshipState::new(2025, &mut rng).unwrap();
        for board in state.historic_kings() {
            assert!(board.leaders.is_empty());
            assert_eq!(board.wins, 0);
        }
    }
}
