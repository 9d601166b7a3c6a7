//! Round-robin tournament engine.
//!
//! Runs amateur league championships end to end: fixture generation,
//! result registration, standings, and a knockout stage for the top
//! four of each category.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Championship`, `Category`, `Team`,
//!   `Match`, `PointRules`
//! - **`scheduler`**: Pairing enumeration, matchday packing, and
//!   double round-robin fixture assembly
//! - **`standings`**: League table ordering
//! - **`bracket`**: Quadrangular semifinals and final
//! - **`stats`**: Per-team streaks, averages, head-to-head, form, and
//!   venue splits
//! - **`validation`**: Integrity checks on names, rosters, rounds,
//!   scores, and penalties
//!
//! # Example
//!
//! ```
//! use torneo::models::{Championship, PointRules};
//!
//! # fn main() -> Result<(), Vec<torneo::validation::ValidationError>> {
//! let mut championship = Championship::new("City League", 1, PointRules::default())?;
//! championship.add_category_with_teams(
//!     "Senior",
//!     vec!["Lions", "Hawks", "Bears", "Wolves"],
//!     None,
//! )?;
//! championship.generate_fixture("Senior")?;
//!
//! // Results are addressed by team names, round, and leg.
//! let first = championship.category("Senior").unwrap().matches[0].clone();
//! championship.register_result(
//!     "Senior",
//!     &first.home,
//!     &first.away,
//!     first.round,
//!     Some(first.leg),
//!     85,
//!     70,
//! )?;
//!
//! let table = championship.standings("Senior").unwrap();
//! assert_eq!(table.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The championship aggregate owns all state; operations address
//! categories and matches by name, round, and leg, never by id.
//! Persistence stays outside the crate: serialize the aggregate with
//! serde and store it wherever fits.
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling - a survey"
//! - de Werra (1981), "Scheduling in sports"

pub mod bracket;
pub mod models;
pub mod scheduler;
pub mod standings;
pub mod stats;
pub mod validation;
