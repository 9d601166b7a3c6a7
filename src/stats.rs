//! Per-team statistics derived from the match list.
//!
//! Everything here is computed on demand from a category's played
//! matches; nothing is stored. Covers:
//! - Win and loss streaks, current and season-best
//! - Scoring averages per game
//! - The widest win and the heaviest defeat
//! - Head-to-head records against every opponent
//! - Recent form, newest result first
//! - Home and away splits
//!
//! Matches count in fixture order, which lists each leg matchday by
//! matchday with the knockout stage last.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, Match, Team};

/// Matches considered for recent form.
pub const FORM_WINDOW: usize = 5;

/// One result from a team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormResult {
    /// The team won.
    Win,
    /// The team lost.
    Loss,
    /// The match was drawn.
    Draw,
}

/// A team's widest winning or losing margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginRecord {
    /// Opponent in that match.
    pub opponent: String,
    /// Score from the team's perspective, e.g. "92-61".
    pub score: String,
    /// Score difference, always positive.
    pub margin: u32,
}

/// Record against one opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    /// Wins against the opponent.
    pub wins: u32,
    /// Losses against the opponent.
    pub losses: u32,
    /// Draws against the opponent.
    pub draws: u32,
}

/// Win/loss record at one venue. Draws count in neither column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    /// Wins at this venue.
    pub wins: u32,
    /// Losses at this venue.
    pub losses: u32,
}

/// Derived season statistics for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    /// Team name.
    pub name: String,
    /// Category the statistics were computed in.
    pub category: String,
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
    /// Ranking points.
    pub points: i32,
    /// Points for minus points against.
    pub score_difference: i64,
    /// Consecutive wins ending at the most recent match.
    pub win_streak: u32,
    /// Consecutive losses ending at the most recent match.
    pub loss_streak: u32,
    /// Longest winning run of the season.
    pub best_win_streak: u32,
    /// Longest losing run of the season.
    pub worst_loss_streak: u32,
    /// Points scored per game, one decimal.
    pub average_points_for: f64,
    /// Points conceded per game, one decimal.
    pub average_points_against: f64,
    /// Score difference per game, one decimal.
    pub average_difference: f64,
    /// Widest win, once one exists.
    pub biggest_win: Option<MarginRecord>,
    /// Heaviest defeat, once one exists.
    pub biggest_loss: Option<MarginRecord>,
    /// Record against each opponent faced, keyed by opponent name.
    pub head_to_head: BTreeMap<String, HeadToHead>,
    /// Last results, newest first, capped at [`FORM_WINDOW`].
    pub recent_form: Vec<FormResult>,
    /// Record in home matches.
    pub home_record: VenueRecord,
    /// Record in away matches.
    pub away_record: VenueRecord,
}

/// Computes the statistics of one team in a category.
///
/// Returns `None` when the team is not on the roster. Unplayed
/// matches are ignored; knockout matches count like any other.
pub fn team_statistics(category: &Category, team_name: &str) -> Option<TeamStatistics> {
    let team = category.team(team_name)?;
    let matches: Vec<&Match> = category
        .matches
        .iter()
        .filter(|m| m.played && m.involves(&team.name))
        .collect();
    let results: Vec<FormResult> = matches.iter().map(|m| outcome_for(m, &team.name)).collect();

    let streaks = streaks(&results);
    let (biggest_win, biggest_loss) = extremes(&matches, &team.name);
    let (home_record, away_record) = venue_split(&matches, &team.name);
    let (average_points_for, average_points_against, average_difference) = averages(team);

    Some(TeamStatistics {
        name: team.name.clone(),
        category: category.name.clone(),
        played: team.played,
        won: team.won,
        lost: team.lost,
        points_for: team.points_for,
        points_against: team.points_against,
        points: team.points,
        score_difference: team.score_difference(),
        win_streak: streaks.current_win,
        loss_streak: streaks.current_loss,
        best_win_streak: streaks.best_win,
        worst_loss_streak: streaks.worst_loss,
        average_points_for,
        average_points_against,
        average_difference,
        biggest_win,
        biggest_loss,
        head_to_head: head_to_head(&matches, &team.name),
        recent_form: results.iter().rev().take(FORM_WINDOW).copied().collect(),
        home_record,
        away_record,
    })
}

/// Classifies a played match from the team's perspective.
fn outcome_for(m: &Match, team: &str) -> FormResult {
    match m.winner() {
        Some(winner) if winner == team => FormResult::Win,
        Some(_) => FormResult::Loss,
        None => FormResult::Draw,
    }
}

struct Streaks {
    current_win: u32,
    current_loss: u32,
    best_win: u32,
    worst_loss: u32,
}

/// Walks the chronological result sequence. A draw breaks both runs.
fn streaks(results: &[FormResult]) -> Streaks {
    let mut run_win = 0;
    let mut run_loss = 0;
    let mut best_win = 0;
    let mut worst_loss = 0;
    for result in results {
        match result {
            FormResult::Win => {
                run_win += 1;
                run_loss = 0;
            }
            FormResult::Loss => {
                run_loss += 1;
                run_win = 0;
            }
            FormResult::Draw => {
                run_win = 0;
                run_loss = 0;
            }
        }
        best_win = best_win.max(run_win);
        worst_loss = worst_loss.max(run_loss);
    }
    Streaks {
        current_win: run_win,
        current_loss: run_loss,
        best_win,
        worst_loss,
    }
}

fn averages(team: &Team) -> (f64, f64, f64) {
    if team.played == 0 {
        return (0.0, 0.0, 0.0);
    }
    let games = team.played as f64;
    (
        round_to_tenth(team.points_for as f64 / games),
        round_to_tenth(team.points_against as f64 / games),
        round_to_tenth(team.score_difference() as f64 / games),
    )
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Finds the widest win and the heaviest defeat. Ties keep the
/// earliest match.
fn extremes(matches: &[&Match], team: &str) -> (Option<MarginRecord>, Option<MarginRecord>) {
    let mut biggest_win: Option<MarginRecord> = None;
    let mut biggest_loss: Option<MarginRecord> = None;
    for m in matches {
        let (Some(home_score), Some(away_score)) = (m.home_score, m.away_score) else {
            continue;
        };
        let at_home = m.home == team;
        let (scored, conceded) = if at_home {
            (home_score, away_score)
        } else {
            (away_score, home_score)
        };
        if scored == conceded {
            continue;
        }
        let record = MarginRecord {
            opponent: if at_home { m.away.clone() } else { m.home.clone() },
            score: format!("{scored}-{conceded}"),
            margin: scored.abs_diff(conceded),
        };
        if scored > conceded {
            if biggest_win.as_ref().map_or(true, |b| record.margin > b.margin) {
                biggest_win = Some(record);
            }
        } else if biggest_loss.as_ref().map_or(true, |b| record.margin > b.margin) {
            biggest_loss = Some(record);
        }
    }
    (biggest_win, biggest_loss)
}

fn head_to_head(matches: &[&Match], team: &str) -> BTreeMap<String, HeadToHead> {
    let mut table: BTreeMap<String, HeadToHead> = BTreeMap::new();
    for m in matches {
        let opponent = if m.home == team { &m.away } else { &m.home };
        let entry = table.entry(opponent.clone()).or_default();
        match outcome_for(m, team) {
            FormResult::Win => entry.wins += 1,
            FormResult::Loss => entry.losses += 1,
            FormResult::Draw => entry.draws += 1,
        }
    }
    table
}

fn venue_split(matches: &[&Match], team: &str) -> (VenueRecord, VenueRecord) {
    let mut home = VenueRecord::default();
    let mut away = VenueRecord::default();
    for m in matches {
        let record = if m.home == team { &mut home } else { &mut away };
        match outcome_for(m, team) {
            FormResult::Win => record.wins += 1,
            FormResult::Loss => record.losses += 1,
            FormResult::Draw => {}
        }
    }
    (home, away)
}
