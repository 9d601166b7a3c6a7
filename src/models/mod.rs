//! Tournament domain models.
//!
//! Core data types for running a championship:
//!
//! - [`Championship`]: the aggregate, categories under shared defaults
//! - [`Category`]: one competition with its roster and calendar
//! - [`Team`]: a roster entry accumulating its season record
//! - [`Match`]: a single game, league or knockout
//! - [`PointRules`]: how a record converts into ranking points
//!
//! Every model serializes with serde, so a whole championship persists
//! and restores as one document.

mod category;
mod championship;
mod game;
mod team;

pub use category::Category;
pub use championship::Championship;
pub use game::{LegType, Match, MatchOutcome};
pub use team::{PointRules, Team};
