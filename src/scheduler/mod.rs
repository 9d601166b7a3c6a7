//! Fixture scheduling.
//!
//! Turns a roster into a double round-robin calendar in three stages:
//!
//! 1. [`enumerate_pairings`] lists every pair of teams once
//! 2. [`pack_matchdays`] arranges pairings into two-match days under
//!    rest and balance constraints
//! 3. [`FixtureAssembler`] materializes packed days into [`Match`]
//!    values, one first and one second leg per cycle
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces the exact calendar.
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling - a survey",
//!   European Journal of Operational Research 188(3)
//!
//! [`Match`]: crate::models::Match

mod fixture;
mod matchday;
mod pairings;

pub use fixture::{FixtureAssembler, FIRST_KICKOFF, SECOND_KICKOFF};
pub use matchday::{pack_matchdays, MATCHES_PER_MATCHDAY};
pub use pairings::{enumerate_pairings, Pairing};
