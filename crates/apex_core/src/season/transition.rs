//! Season transition engine
//!
//! Runs once per season boundary, in a fixed order:
//!
//! 1. awards + hall-of-fame ledger
//! 2. driver development
//! 3. retirement evaluation
//! 4. dismissal review (bottom of the standings only)
//! 5. seat replacement from the rookie pool
//! 6. full per-season reset
//!
//! Not idempotent: calling twice advances two seasons and duplicates awards.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::constants::{dismissal, expectation};
use crate::error::Result;
use crate::season::awards::{distribute_season_awards, standings_order, HallOfFameEntry};
use crate::season::development::{apply_season_development, DevelopmentChange};
use crate::season::rookie_pool::RookieCandidate;
use crate::state::{compute_power_rank_map, ChampionshipState};

/// Why a driver left the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    Retired,
    Dismissed,
}

/// Everything the host needs to report a season boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub closed_year: u32,
    pub hall_of_fame_entry: HallOfFameEntry,
    pub transfer_news: Vec<String>,
    pub development_log: Vec<DevelopmentChange>,
}

/// Advance `state` across one season boundary.
pub fn advance_season<R: Rng>(state: &mut ChampionshipState, rng: &mut R) -> Result<SeasonReport> {
    let closed_year = state.year;

    // 1. Awards and the permanent champions ledger.
    let ledger = distribute_season_awards(&mut state.drivers, &state.power_rank_map, closed_year)?;
    state.hall_of_fame.push(ledger.clone());

    // 2. Development. Applies to everyone on the grid at the boundary,
    // including drivers about to retire.
    let mut development_log = Vec::with_capacity(state.drivers.len());
    for driver in &mut state.drivers {
        let summary = apply_season_development(driver, rng);
        development_log.push(DevelopmentChange {
            driver: driver.name.clone(),
            category: driver.category,
            summary,
            new_power: driver.overall_power,
        });
    }
    state.development_log = development_log.clone();

    let mut transfer_news: Vec<String> = Vec::new();
    let mut leavers: Vec<(String, ExitReason)> = Vec::new();

    // 3. Retirement.
    for driver in &state.drivers {
        if driver.seasons_raced >= driver.retirement_deadline {
            transfer_news.push(format!(
                "RETIREMENT: after {} seasons, {} ({}) hangs up the helmet",
                driver.seasons_raced, driver.name, driver.team
            ));
            leavers.push((driver.name.clone(), ExitReason::Retired));
        }
    }

    // 4. Dismissal review over the bottom of the standings. Strikes are
    // cumulative across seasons and never reset; see the pinning test.
    let order = standings_order(&state.drivers);
    let bottom: Vec<usize> = order
        .iter()
        .rev()
        .take(dismissal::REVIEW_WINDOW)
        .rev()
        .copied()
        .collect();
    let roster_size = state.drivers.len();

    for &idx in &bottom {
        if leavers.iter().any(|(name, _)| name == &state.drivers[idx].name) {
            continue;
        }
        let my_pos = order
            .iter()
            .position(|&i| i == idx)
            .unwrap_or(roster_size - 1);
        let points_rank = my_pos as u32 + 1;
        let season_points = state.drivers[idx].season.points;

        let mut strikes = 0u32;
        let mut reason = String::new();

        if season_points == 0 && my_pos == roster_size - 1 {
            // Scoreless and dead last outweighs the per-signal checks.
            strikes += dismissal::DEAD_LAST_STRIKES;
            reason = "scored nothing all season while finishing last".to_string();
        } else {
            if my_pos > 0 {
                let ahead = &state.drivers[order[my_pos - 1]];
                let gap = ahead.season.points - season_points;
                if gap >= dismissal::POINT_GAP_STRIKE {
                    strikes += 1;
                    reason = format!("dropped {gap} points behind the next seat");
                }
            }
            let expected_rank = state
                .power_rank_map
                .get(&state.drivers[idx].name)
                .copied()
                .unwrap_or(expectation::DEFAULT_POWER_RANK);
            if points_rank >= expected_rank + dismissal::EXPECTATION_SLACK {
                strikes += 1;
                reason = format!("expected P{expected_rank}, finished P{points_rank}");
            }
        }

        state.drivers[idx].bad_season_strikes += strikes;
        if state.drivers[idx].bad_season_strikes >= dismissal::STRIKE_LIMIT {
            let driver = &state.drivers[idx];
            transfer_news.push(format!(
                "DISMISSAL: {} ({}) is let go after another poor season ({reason})",
                driver.name, driver.team
            ));
            leavers.push((driver.name.clone(), ExitReason::Dismissed));
            // The snapshot goes back into the pool for a future draw; it is
            // never what fills this driver's own vacated seat.
            state.rookie_pool.push_back(RookieCandidate {
                name: driver.name.clone(),
                attributes: driver.attributes,
            });
        }
    }

    // 5. Replacement: archive each leaver and fill the vacated seat from the
    // rookie pool.
    let mut survivors: Vec<String> = state
        .drivers
        .iter()
        .map(|d| d.name.clone())
        .filter(|name| !leavers.iter().any(|(leaver, _)| leaver == name))
        .collect();

    for (name, exit) in &leavers {
        let Some(pos) = state.drivers.iter().position(|d| &d.name == name) else {
            continue;
        };
        let old_driver = state.drivers.remove(pos);
        let team_name = old_driver.team.clone();
        state.retired.push(old_driver);

        if let Some(team) = state.teams.iter_mut().find(|t| t.name == team_name) {
            team.remove_driver(name);
            let new_driver = state.rookie_pool.draw(&team_name, rng);
            team.add_driver(new_driver.name.clone());
            match exit {
                ExitReason::Retired => transfer_news.push(format!(
                    "SIGNING: {} put {} under contract",
                    team_name, new_driver.name
                )),
                ExitReason::Dismissed => transfer_news.push(format!(
                    "TRANSFER: {} brought in {}",
                    team_name, new_driver.name
                )),
            }
            state.drivers.push(new_driver);
        }
    }

    // 6. Reset for the new season. Survivors bank a season of service; new
    // hires start at zero.
    survivors.retain(|name| state.drivers.iter().any(|d| &d.name == name));
    for driver in &mut state.drivers {
        if survivors.contains(&driver.name) {
            driver.seasons_raced += 1;
        }
        driver.reset_for_new_season();
    }
    for team in &mut state.teams {
        team.reset_for_new_season();
    }

    state.race_index = 0;
    state.race_history.clear();
    state.season_winners.clear();
    state.season_poles.clear();
    state.points_history = state
        .drivers
        .iter()
        .map(|d| (d.name.clone(), vec![0]))
        .collect();
    state.power_rank_map = compute_power_rank_map(&state.drivers);
    state.circuits.shuffle(rng);
    state.year += 1;
    state.transfer_log = transfer_news.clone();

    state.check_roster_invariants()?;

    log::info!(
        "season {closed_year} closed: champion {}, {} leavers",
        state
            .hall_of_fame
            .last()
            .map(|e| e.champion.as_str())
            .unwrap_or("-"),
        leavers.len()
    );

    Ok(SeasonReport {
        closed_year,
        hall_of_fame_entry: ledger,
        transfer_news,
        development_log,
    })
}
