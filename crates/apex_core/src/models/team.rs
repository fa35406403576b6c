use serde::{Deserialize, Serialize};

use super::Driver;
use crate::error::{Result, SimError};

/// Number of seats per team; maintained by replacement-on-removal.
pub const TEAM_SIZE: usize = 2;

/// A constructor entry. The roster holds driver names; driver entities live
/// in the championship state and carry the back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub drivers: Vec<String>,
    pub season_points: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            drivers: Vec::new(),
            season_points: 0,
        }
    }

    pub fn add_driver(&mut self, driver_name: impl Into<String>) {
        self.drivers.push(driver_name.into());
    }

    pub fn remove_driver(&mut self, driver_name: &str) {
        self.drivers.retain(|d| d != driver_name);
    }

    /// Recompute the team total by summing member season points.
    pub fn recompute_points(&mut self, drivers: &[Driver]) {
        self.season_points = drivers
            .iter()
            .filter(|d| self.drivers.iter().any(|name| name == &d.name))
            .map(|d| d.season.points)
            .sum();
    }

    pub fn reset_for_new_season(&mut self) {
        self.season_points = 0;
    }

    /// Every team holds exactly [`TEAM_SIZE`] drivers outside the middle of a
    /// replacement step; anything else is a logic defect.
    pub fn check_roster_invariant(&self) -> Result<()> {
        if self.drivers.len() != TEAM_SIZE {
            return Err(SimError::RosterInvariant(format!(
                "team {} holds {} drivers, expected {}",
                self.name,
                self.drivers.len(),
                TEAM_SIZE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::driver::Attributes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn driver(name: &str, team: &str, points: u32) -> Driver {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut d = Driver::new(
            name,
            team,
            Attributes {
                speed: 5.0,
                handling: 5.0,
                braking: 5.0,
                intelligence: 5.0,
            },
            &mut rng,
        );
        d.season.points = points;
        d
    }

    #[test]
    fn team_points_sum_member_season_points() {
        let drivers = vec![
            driver("A", "Crimson", 30),
            driver("B", "Crimson", 12),
            driver("C", "Cobalt", 50),
        ];
        let mut team = Team::new("Crimson");
        team.add_driver("A");
        team.add_driver("B");
        team.recompute_points(&drivers);
        assert_eq!(team.season_points, 42);
    }

    #[test]
    fn roster_invariant_rejects_odd_sizes() {
        let mut team = Team::new("Amber");
        team.add_driver("A");
        assert!(team.check_roster_invariant().is_err());
        team.add_driver("B");
        assert!(team.check_roster_invariant().is_ok());
        team.add_driver("C");
        assert!(team.check_roster_invariant().is_err());
    }
}
