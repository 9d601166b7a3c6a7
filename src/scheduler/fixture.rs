//! Fixture assembly for double round-robin seasons.
//!
//! Expands a roster into a playable calendar:
//! - Every cycle produces a first leg and a second leg
//! - Each leg packs the full set of pairings into matchdays on its own
//! - The second leg swaps home and away
//! - Matchday slots carry the evening kickoff times
//!
//! Round and matchday numbering restarts at 1 for each leg, so a match
//! is addressed by its teams, its round number, and its leg.

use log::{debug, info};
use rand::Rng;

use crate::models::{LegType, Match};
use crate::scheduler::matchday::pack_matchdays;
use crate::scheduler::pairings::enumerate_pairings;
use crate::validation::{ValidationError, ValidationErrorKind, MIN_TEAMS};

/// Default kickoff for the first slot of a matchday.
pub const FIRST_KICKOFF: &str = "20:00";
/// Default kickoff for the second slot of a matchday.
pub const SECOND_KICKOFF: &str = "21:00";

/// Builds the complete match list for a season.
#[derive(Debug, Clone)]
pub struct FixtureAssembler {
    rounds: u32,
    first_kickoff: String,
    second_kickoff: String,
}

impl FixtureAssembler {
    /// Creates an assembler producing `rounds` home-and-away cycles.
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds,
            first_kickoff: FIRST_KICKOFF.to_string(),
            second_kickoff: SECOND_KICKOFF.to_string(),
        }
    }

    /// Overrides the kickoff times assigned to matchday slots.
    pub fn with_kickoff_slots(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.first_kickoff = first.into();
        self.second_kickoff = second.into();
        self
    }

    /// Assembles the season calendar for the given roster.
    ///
    /// Each cycle contributes two legs; within a leg every pair of
    /// teams meets exactly once and matchday numbering starts over at
    /// 1. The second leg reverses the home assignment of the first.
    ///
    /// # Example
    /// ```
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    /// use torneo::scheduler::FixtureAssembler;
    ///
    /// let teams: Vec<String> = ["Lions", "Hawks", "Bears", "Wolves"]
    ///     .iter()
    ///     .map(|s| s.to_string())
    ///     .collect();
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let matches = FixtureAssembler::new(1).assemble(&teams, &mut rng).unwrap();
    /// assert_eq!(matches.len(), 12); // six pairings, two legs
    /// ```
    pub fn assemble<R: Rng>(
        &self,
        teams: &[String],
        rng: &mut R,
    ) -> Result<Vec<Match>, Vec<ValidationError>> {
        if teams.len() < MIN_TEAMS {
            return Err(vec![ValidationError::new(
                ValidationErrorKind::TeamCount,
                format!(
                    "A fixture needs at least {MIN_TEAMS} teams, got {}",
                    teams.len()
                ),
            )]);
        }

        let pairings = enumerate_pairings(teams.len());
        let mut matches = Vec::with_capacity(pairings.len() * 2 * self.rounds as usize);

        for cycle in 0..self.rounds {
            for leg in [LegType::FirstLeg, LegType::SecondLeg] {
                let matchdays = pack_matchdays(&pairings, teams.len(), rng);
                debug!(
                    "cycle {}: packed {} matchdays for {:?}",
                    cycle + 1,
                    matchdays.len(),
                    leg
                );
                for (day_idx, day) in matchdays.iter().enumerate() {
                    let number = day_idx as u32 + 1;
                    for (slot, pairing) in day.iter().enumerate() {
                        let (home, away) = if leg == LegType::SecondLeg {
                            (pairing.away, pairing.home)
                        } else {
                            (pairing.home, pairing.away)
                        };
                        let time = if slot == 0 {
                            self.first_kickoff.as_str()
                        } else {
                            self.second_kickoff.as_str()
                        };
                        matches.push(
                            Match::new(teams[home].clone(), teams[away].clone(), number, leg, number)
                                .with_time(time),
                        );
                    }
                }
            }
        }

        info!(
            "assembled {} matches for {} teams over {} cycle(s)",
            matches.len(),
            teams.len(),
            self.rounds
        );
        Ok(matches)
    }
}
