//! Race simulator
//!
//! One call runs qualifying, weather, reliability and the race for a single
//! circuit, applies every counter side effect to the drivers directly and
//! returns the [`RaceOutcome`] record. Computing a result and applying it are
//! one atomic operation from the caller's perspective.
//!
//! Every sort in here is a stable descending sort on score, so tied scores
//! keep the current roster order. That tie-break is deliberate and relied on
//! by the tests.

use rand::Rng;

use crate::data;
use crate::engine::constants::{pace, reliability, scoring, weather};
use crate::error::{Result, SimError};
use crate::models::{Circuit, Driver, FinishStatus, QualifyingRow, RaceOutcome, RaceRow};

/// Qualifying pace: weighted power plus circuit-scaled noise.
fn qualifying_score<R: Rng>(driver: &Driver, circuit: &Circuit, rng: &mut R) -> f32 {
    let mut dynamic_power = driver.overall_power;
    if driver.has_mastery(&circuit.name) {
        dynamic_power += pace::MASTERY_BOOST;
    }
    let chaos = pace::QUALY_CHAOS_BASE * circuit.focus_factor;
    dynamic_power * pace::QUALY_POWER_MULTIPLIER + rng.gen_range(-chaos..chaos)
}

/// Race power: attributes with the wet-race multiplier on handling and
/// intelligence, plus mastery and pole bonuses. Stored attributes are left
/// untouched.
fn race_power(driver: &Driver, circuit: &Circuit, rainy: bool, on_pole: bool) -> f32 {
    let (handling, intelligence) = if rainy {
        (
            driver.attributes.handling * weather::RAIN_MULTIPLIER,
            driver.attributes.intelligence * weather::RAIN_MULTIPLIER,
        )
    } else {
        (driver.attributes.handling, driver.attributes.intelligence)
    };

    let mut power = driver.attributes.speed + handling + driver.attributes.braking + intelligence;
    if driver.has_mastery(&circuit.name) {
        power += pace::MASTERY_BOOST;
    }
    if on_pole {
        power += pace::POLE_BOOST;
    }
    power
}

/// Per-race failure probability.
///
/// Deliberately unclamped: with the shipped constants the additive base keeps
/// it positive, and if a future retune drives it negative the draw below
/// simply never triggers. See the pinning test.
fn dnf_probability(driver: &Driver, circuit: &Circuit) -> f64 {
    reliability::BASE_DNF_CHANCE
        + (1.0 - (driver.overall_power / reliability::MAX_POWER) as f64)
            * reliability::POWER_INFLUENCE
        + ((circuit.focus_factor - 1.0) as f64) * reliability::CIRCUIT_DNF_INFLUENCE
}

/// Simulate one race at `circuit`, mutating driver season and career counters
/// in place.
///
/// The pole sitter's pole counters increment unconditionally, before the race
/// is run; a later DNF does not take the pole away.
pub fn simulate_race<R: Rng>(
    drivers: &mut [Driver],
    circuit: &Circuit,
    rng: &mut R,
) -> Result<RaceOutcome> {
    if drivers.is_empty() {
        return Err(SimError::EmptyRoster);
    }

    let mut log = Vec::new();

    // Qualifying. Indices into `drivers`, stable-sorted by descending score.
    let mut grid: Vec<(usize, f32)> = drivers
        .iter()
        .enumerate()
        .map(|(idx, d)| (idx, qualifying_score(d, circuit, rng)))
        .collect();
    grid.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let pole_idx = grid[0].0;
    drivers[pole_idx].season.poles += 1;
    drivers[pole_idx].career.poles += 1;
    let pole_name = drivers[pole_idx].name.clone();

    let rainy = rng.gen::<f64>() < weather::RAIN_CHANCE;
    log.push(format!(
        "Weather: {} | Pole: {}",
        if rainy { "Rain" } else { "Dry" },
        pole_name
    ));

    // Race. One reliability roll per driver, then a noisy score for everyone
    // still running.
    let chaos_race = pace::RACE_CHAOS_BASE * circuit.focus_factor;
    let mut finishers: Vec<(usize, f32)> = Vec::with_capacity(drivers.len());
    let mut dnf_order: Vec<usize> = Vec::new();

    for idx in 0..drivers.len() {
        drivers[idx].career.races += 1;
        let power = race_power(&drivers[idx], circuit, rainy, idx == pole_idx);

        if rng.gen::<f64>() < dnf_probability(&drivers[idx], circuit) {
            drivers[idx].season.dnfs += 1;
            drivers[idx].career.dnfs += 1;
            dnf_order.push(idx);
            log.push(format!("DNF: {} is out of the race", drivers[idx].name));
        } else {
            finishers.push((idx, power + rng.gen_range(-chaos_race..chaos_race)));
        }
    }

    finishers.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let winner = finishers.first().map(|&(idx, _)| idx);
    if let Some(idx) = winner {
        drivers[idx].career.wins += 1;
        if data::is_historic_circuit(&circuit.name) {
            drivers[idx].record_historic_win(&circuit.name);
        }
    }

    // Classification: scored places, unscored finishers, then unranked DNFs.
    let mut classification = Vec::with_capacity(drivers.len());
    for (pos, &(idx, _)) in finishers.iter().enumerate() {
        let rank = pos as u32 + 1;
        if rank <= scoring::SCORED_PLACES {
            if rank == 1 {
                drivers[idx].season.wins += 1;
            }
            if rank <= scoring::PODIUM_PLACES {
                drivers[idx].season.podiums += 1;
                drivers[idx].career.podiums += 1;
            }
            let pts = scoring::points_for_rank(rank);
            drivers[idx].add_points(pts);
            classification.push(RaceRow {
                rank: Some(rank),
                driver: drivers[idx].name.clone(),
                team: drivers[idx].team.clone(),
                points: pts,
                status: FinishStatus::Finished,
            });
        } else {
            classification.push(RaceRow {
                rank: Some(rank),
                driver: drivers[idx].name.clone(),
                team: drivers[idx].team.clone(),
                points: 0,
                status: FinishStatus::Finished,
            });
        }
    }
    for &idx in &dnf_order {
        classification.push(RaceRow {
            rank: None,
            driver: drivers[idx].name.clone(),
            team: drivers[idx].team.clone(),
            points: 0,
            status: FinishStatus::Dnf,
        });
    }

    let qualifying = grid
        .iter()
        .enumerate()
        .map(|(pos, &(idx, score))| QualifyingRow {
            rank: pos as u32 + 1,
            driver: drivers[idx].name.clone(),
            score,
        })
        .collect();

    log::debug!(
        "{}: {} finishers, {} DNFs, winner {:?}",
        circuit.name,
        finishers.len(),
        dnf_order.len(),
        winner.map(|idx| drivers[idx].name.as_str())
    );

    Ok(RaceOutcome {
        circuit: circuit.name.clone(),
        rainy,
        log,
        classification,
        qualifying,
        winner: winner.map(|idx| drivers[idx].name.clone()),
        pole_sitter: pole_name,
    })
}
