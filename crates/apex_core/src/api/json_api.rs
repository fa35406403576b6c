//! JSON boundary for host integrations
//!
//! Request/response structs mirror what a host process sends over the
//! embedding boundary: a schema version, an explicit seed, and plain data.
//! Same request (including seed) always yields the same response.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::commentary::{generate_commentary, DriverComment};
use crate::engine::race_sim::simulate_race;
use crate::error::{Result, SimError};
use crate::models::{Attributes, CareerStats, Circuit, Driver, RaceOutcome, SeasonStats};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct DriverData {
    pub name: String,
    pub team: String,
    pub speed: f32,
    pub handling: f32,
    pub braking: f32,
    pub intelligence: f32,
    /// Season counters carried into this request; defaults to a fresh season.
    #[serde(default)]
    pub season: SeasonStats,
    #[serde(default)]
    pub career: CareerStats,
}

#[derive(Debug, Deserialize)]
pub struct CircuitData {
    pub name: String,
    pub focus_factor: f32,
}

#[derive(Debug, Deserialize)]
pub struct RaceRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub drivers: Vec<DriverData>,
    pub circuit: CircuitData,
}

/// Post-race driver tally, returned so the host can persist updated counters.
#[derive(Debug, Serialize, Deserialize)]
pub struct DriverTally {
    pub name: String,
    pub team: String,
    pub season: SeasonStats,
    pub career: CareerStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RaceResponse {
    pub schema_version: u8,
    pub outcome: RaceOutcome,
    pub drivers: Vec<DriverTally>,
}

#[derive(Debug, Deserialize)]
pub struct CommentaryRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub drivers: Vec<DriverData>,
    /// Season-start power ranks, driver name → rank (1 = best).
    pub power_rank_map: HashMap<String, u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentaryResponse {
    pub schema_version: u8,
    pub comments: Vec<DriverComment>,
}

fn check_schema(version: u8) -> Result<()> {
    if version != SCHEMA_VERSION {
        return Err(SimError::SchemaVersion(version));
    }
    Ok(())
}

fn build_drivers(data: &[DriverData], rng: &mut ChaCha8Rng) -> Vec<Driver> {
    data.iter()
        .map(|d| {
            let mut driver = Driver::new(
                d.name.clone(),
                d.team.clone(),
                Attributes {
                    speed: d.speed,
                    handling: d.handling,
                    braking: d.braking,
                    intelligence: d.intelligence,
                },
                rng,
            );
            driver.season = d.season;
            driver.career = d.career;
            driver
        })
        .collect()
}

/// Simulate one race from a JSON request; returns the JSON response.
pub fn simulate_race_json(request_json: &str) -> Result<String> {
    let request: RaceRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let mut drivers = build_drivers(&request.drivers, &mut rng);
    let circuit = Circuit::new(request.circuit.name.clone(), request.circuit.focus_factor);

    let outcome = simulate_race(&mut drivers, &circuit, &mut rng)?;
    let response = RaceResponse {
        schema_version: SCHEMA_VERSION,
        outcome,
        drivers: drivers
            .into_iter()
            .map(|d| DriverTally {
                name: d.name,
                team: d.team,
                season: d.season,
                career: d.career,
            })
            .collect(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Generate standings commentary from a JSON request.
pub fn generate_commentary_json(request_json: &str) -> Result<String> {
    let request: CommentaryRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let drivers = build_drivers(&request.drivers, &mut rng);
    let comments = generate_commentary(&drivers, &request.power_rank_map, &mut rng);
    Ok(serde_json::to_string(&CommentaryResponse {
        schema_version: SCHEMA_VERSION,
        comments,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn race_request(seed: u64) -> String {
        json!({
            "schema_version": 1,
            "seed": seed,
            "drivers": [
                {"name": "Vance", "team": "Crimson", "speed": 10.0, "handling": 9.0, "braking": 9.0, "intelligence": 9.0},
                {"name": "Livia", "team": "Crimson", "speed": 4.0, "handling": 4.0, "braking": 4.0, "intelligence": 5.0},
                {"name": "Matteo", "team": "Cobalt", "speed": 6.0, "handling": 6.0, "braking": 7.0, "intelligence": 7.0},
                {"name": "Felix", "team": "Cobalt", "speed": 6.0, "handling": 6.0, "braking": 6.0, "intelligence": 5.0}
            ],
            "circuit": {"name": "Port Royale", "focus_factor": 1.4}
        })
        .to_string()
    }

    #[test]
    fn race_roundtrip() {
        let response_json = simulate_race_json(&race_request(42)).unwrap();
        let response: RaceResponse = serde_json::from_str(&response_json).unwrap();
        assert_eq!(response.schema_version, SCHEMA_VERSION);
        assert_eq!(response.drivers.len(), 4);
        assert_eq!(response.outcome.circuit, "Port Royale");
        // Every entrant raced once.
        assert!(response.drivers.iter().all(|d| d.career.races == 1));
    }

    #[test]
    fn same_seed_same_response() {
        let a = simulate_race_json(&race_request(7)).unwrap();
        let b = simulate_race_json(&race_request(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_schema_version_is_rejected() {
        let request = json!({
            "schema_version": 9,
            "seed": 1,
            "drivers": [],
            "circuit": {"name": "Jinhu", "focus_factor": 1.0}
        })
        .to_string();
        assert!(matches!(
            simulate_race_json(&request),
            Err(SimError::SchemaVersion(9))
        ));
    }

    #[test]
    fn commentary_roundtrip() {
        let request = json!({
            "schema_version": 1,
            "seed": 5,
            "drivers": [
                {"name": "Vance", "team": "Crimson", "speed": 10.0, "handling": 9.0, "braking": 9.0, "intelligence": 9.0,
                 "season": {"points": 40, "wins": 2, "poles": 1, "podiums": 3, "dnfs": 0}},
                {"name": "Livia", "team": "Cobalt", "speed": 4.0, "handling": 4.0, "braking": 4.0, "intelligence": 5.0,
                 "season": {"points": 2, "wins": 0, "poles": 0, "podiums": 0, "dnfs": 3}}
            ],
            "power_rank_map": {"Vance": 2, "Livia": 1}
        })
        .to_string();
        let response: CommentaryResponse =
            serde_json::from_str(&generate_commentary_json(&request).unwrap()).unwrap();
        assert_eq!(response.comments.len(), 2);
        assert_eq!(response.comments[0].driver, "Vance");
    }
}
