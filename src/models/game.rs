//! Match model.
//!
//! A match is one contest between two teams; field order encodes
//! home/away. Every match belongs to a leg (first or second leg of a
//! home-and-away cycle, or a knockout stage) and to a matchday within
//! that leg. Scores and outcome stay empty until a result is registered.

use serde::{Deserialize, Serialize};

/// The leg (or knockout stage) a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegType {
    /// First leg of a home-and-away cycle.
    FirstLeg,
    /// Second leg: the same pairings with home and away swapped.
    SecondLeg,
    /// Knockout semifinal.
    Semifinal,
    /// Knockout final.
    Final,
}

impl LegType {
    /// Whether this is a knockout stage rather than a league leg.
    #[inline]
    pub fn is_knockout(self) -> bool {
        matches!(self, LegType::Semifinal | LegType::Final)
    }
}

/// Result classification of a played match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOutcome {
    /// The home side scored more.
    HomeWin,
    /// The away side scored more.
    AwayWin,
    /// Equal scores. Only 0-0 passes score validation.
    Draw,
}

/// A single match between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Home team name.
    pub home: String,
    /// Away team name.
    pub away: String,
    /// Round number. Restarts at 1 per leg; for league matches it equals
    /// the matchday index. Knockout matches use
    /// [`KNOCKOUT_ROUND`](crate::bracket::KNOCKOUT_ROUND).
    pub round: u32,
    /// Leg or knockout stage.
    pub leg: LegType,
    /// Matchday index within the leg, starting at 1.
    pub matchday: u32,
    /// Whether a result has been registered.
    pub played: bool,
    /// Home score, once played.
    pub home_score: Option<u32>,
    /// Away score, once played.
    pub away_score: Option<u32>,
    /// Outcome, once played.
    pub outcome: Option<MatchOutcome>,
    /// Presentation date, e.g. "2026-03-14". Opaque to the engine.
    pub date: Option<String>,
    /// Presentation kickoff time, e.g. "20:00". Opaque to the engine.
    pub time: Option<String>,
}

impl Match {
    /// Creates an unplayed match.
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        round: u32,
        leg: LegType,
        matchday: u32,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            round,
            leg,
            matchday,
            played: false,
            home_score: None,
            away_score: None,
            outcome: None,
            date: None,
            time: None,
        }
    }

    /// Sets the kickoff time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Whether the given team plays in this match.
    #[inline]
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    /// Whether this match is between the two teams, in either order.
    pub fn pairs(&self, team_a: &str, team_b: &str) -> bool {
        (self.home == team_a && self.away == team_b)
            || (self.home == team_b && self.away == team_a)
    }

    /// Whether this is a knockout match.
    #[inline]
    pub fn is_knockout(&self) -> bool {
        self.leg.is_knockout()
    }

    /// Winning team name. `None` while unplayed and on draws.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome? {
            MatchOutcome::HomeWin => Some(&self.home),
            MatchOutcome::AwayWin => Some(&self.away),
            MatchOutcome::Draw => None,
        }
    }

    /// Whether the match ended drawn.
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.outcome == Some(MatchOutcome::Draw)
    }

    /// Records a result. Scores must already be in home/away order.
    pub fn set_result(&mut self, home_score: u32, away_score: u32) {
        self.played = true;
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.outcome = Some(if home_score > away_score {
            MatchOutcome::HomeWin
        } else if away_score > home_score {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        });
    }

    /// Sets the presentation schedule.
    pub fn set_schedule(&mut self, date: impl Into<String>, time: impl Into<String>) {
        self.date = Some(date.into());
        self.time = Some(time.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> Match {
        Match::new("Lions", "Hawks", 1, LegType::FirstLeg, 1)
    }

    #[test]
    fn test_new_match_unplayed() {
        let m = sample_match();
        assert!(!m.played);
        assert_eq!(m.home_score, None);
        assert_eq!(m.outcome, None);
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_pairs_either_order() {
        let m = sample_match();
        assert!(m.pairs("Lions", "Hawks"));
        assert!(m.pairs("Hawks", "Lions"));
        assert!(!m.pairs("Lions", "Bears"));
        assert!(m.involves("Hawks"));
        assert!(!m.involves("Bears"));
    }

    #[test]
    fn test_set_result_home_win() {
        let mut m = sample_match();
        m.set_result(85, 70);
        assert!(m.played);
        assert_eq!(m.outcome, Some(MatchOutcome::HomeWin));
        assert_eq!(m.winner(), Some("Lions"));
    }

    #[test]
    fn test_set_result_away_win() {
        let mut m = sample_match();
        m.set_result(70, 85);
        assert_eq!(m.outcome, Some(MatchOutcome::AwayWin));
        assert_eq!(m.winner(), Some("Hawks"));
    }

    #[test]
    fn test_set_result_draw() {
        let mut m = sample_match();
        m.set_result(0, 0);
        assert!(m.is_draw());
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_knockout_classification() {
        assert!(LegType::Semifinal.is_knockout());
        assert!(LegType::Final.is_knockout());
        assert!(!LegType::FirstLeg.is_knockout());
        assert!(!LegType::SecondLeg.is_knockout());
    }

    #[test]
    fn test_set_schedule() {
        let mut m = sample_match();
        m.set_schedule("2026-03-14", "21:30");
        assert_eq!(m.date.as_deref(), Some("2026-03-14"));
        assert_eq!(m.time.as_deref(), Some("21:30"));
    }

    #[test]
    fn test_leg_type_serialized_form() {
        let json = serde_json::to_string(&LegType::FirstLeg).unwrap();
        assert_eq!(json, "\"first-leg\"");
        let json = serde_json::to_string(&LegType::SecondLeg).unwrap();
        assert_eq!(json, "\"second-leg\"");
        let back: LegType = serde_json::from_str("\"semifinal\"").unwrap();
        assert_eq!(back, LegType::Semifinal);
    }
}
