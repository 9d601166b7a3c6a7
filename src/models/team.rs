//! Team model and season record.
//!
//! A team accumulates its record (played, won, lost, points scored and
//! conceded) as results are registered. Ranking points are derived from
//! the record and the category's point rules, minus penalty points.
//! Results can be reverted, which makes overwriting a registered result
//! equivalent to having registered only the final score.

use serde::{Deserialize, Serialize};

/// Points awarded per result.
///
/// Defaults follow common basketball league scoring: 2 points per win,
/// 0 per loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRules {
    /// Points awarded for a win.
    pub points_per_win: i32,
    /// Points awarded for a loss.
    pub points_per_loss: i32,
}

impl Default for PointRules {
    fn default() -> Self {
        Self {
            points_per_win: 2,
            points_per_loss: 0,
        }
    }
}

impl PointRules {
    /// Creates point rules with the given awards.
    pub fn new(points_per_win: i32, points_per_loss: i32) -> Self {
        Self {
            points_per_win,
            points_per_loss,
        }
    }
}

/// A team and its accumulated season record.
///
/// The record is derived state: replaying the category's match list
/// reproduces it exactly. Penalty points are the only out-of-band
/// adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team name (unique within a category, case-insensitive).
    pub name: String,
    /// Matches played.
    pub played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches lost.
    pub lost: u32,
    /// Total points scored.
    pub points_for: u32,
    /// Total points conceded.
    pub points_against: u32,
    /// Accumulated penalty points, subtracted from ranking points.
    /// Negative values act as a bonus.
    pub penalty_points: i32,
    /// Ranking points derived from the record and the point rules.
    pub points: i32,
}

impl Team {
    /// Creates a team with a blank record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            played: 0,
            won: 0,
            lost: 0,
            points_for: 0,
            points_against: 0,
            penalty_points: 0,
            points: 0,
        }
    }

    /// Score difference (points for minus points against).
    #[inline]
    pub fn score_difference(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// Matches drawn (played but neither won nor lost).
    #[inline]
    pub fn drawn(&self) -> u32 {
        self.played - self.won - self.lost
    }

    /// Records a result from this team's perspective.
    ///
    /// A draw (equal scores) advances the played count only.
    pub fn record_result(&mut self, scored: u32, conceded: u32, rules: &PointRules) {
        self.played += 1;
        if scored > conceded {
            self.won += 1;
        } else if conceded > scored {
            self.lost += 1;
        }
        self.points_for += scored;
        self.points_against += conceded;
        self.recalculate_points(rules);
    }

    /// Reverts a previously recorded result.
    ///
    /// Must mirror an earlier `record_result` with the same scores.
    pub fn revert_result(&mut self, scored: u32, conceded: u32, rules: &PointRules) {
        self.played -= 1;
        if scored > conceded {
            self.won -= 1;
        } else if conceded > scored {
            self.lost -= 1;
        }
        self.points_for -= scored;
        self.points_against -= conceded;
        self.recalculate_points(rules);
    }

    /// Adds penalty points and refreshes ranking points.
    pub fn apply_penalty(&mut self, points: i32, rules: &PointRules) {
        self.penalty_points += points;
        self.recalculate_points(rules);
    }

    /// Clears the record and penalties, as when a fixture is regenerated.
    pub fn reset_record(&mut self, rules: &PointRules) {
        self.played = 0;
        self.won = 0;
        self.lost = 0;
        self.points_for = 0;
        self.points_against = 0;
        self.penalty_points = 0;
        self.recalculate_points(rules);
    }

    /// Recomputes ranking points from the current record.
    pub fn recalculate_points(&mut self, rules: &PointRules) {
        self.points = self.won as i32 * rules.points_per_win
            + self.lost as i32 * rules.points_per_loss
            - self.penalty_points;
    }
}
