//! Rookie intake queue
//!
//! Replacement seats are filled front-first from this queue. Dismissed
//! drivers' attribute snapshots are pushed onto the tail, so the pool is a
//! churn buffer rather than a pure depletion stack. An exhausted pool is not
//! an error: a baseline filler driver is generated instead.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::data;
use crate::models::{Attributes, Driver};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RookieCandidate {
    pub name: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RookiePool {
    queue: VecDeque<RookieCandidate>,
}

impl RookiePool {
    pub fn new(candidates: impl IntoIterator<Item = RookieCandidate>) -> Self {
        Self {
            queue: candidates.into_iter().collect(),
        }
    }

    /// The shipped intake queue.
    pub fn initial() -> Self {
        Self::new(data::INITIAL_ROOKIE_INTAKE.iter().map(|entry| RookieCandidate {
            name: entry.0.to_string(),
            attributes: data::attributes_from_tuple(entry),
        }))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Push a dismissed driver's snapshot onto the tail for a future draw.
    pub fn push_back(&mut self, candidate: RookieCandidate) {
        self.queue.push_back(candidate);
    }

    /// Draw the next candidate as a new driver for `team`. Falls back to a
    /// generated baseline filler when the queue is exhausted.
    pub fn draw<R: Rng>(&mut self, team: &str, rng: &mut R) -> Driver {
        match self.queue.pop_front() {
            Some(candidate) => Driver::new(candidate.name, team, candidate.attributes, rng),
            None => {
                let name = format!("Junior {}", rng.gen_range(100..1000));
                log::info!("rookie pool exhausted, generating filler driver {name}");
                Driver::new(
                    name,
                    team,
                    Attributes {
                        speed: 5.0,
                        handling: 5.0,
                        braking: 5.0,
                        intelligence: 5.0,
                    },
                    rng,
                )
            }
        }
    }
}
