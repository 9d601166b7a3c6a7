//! A category: one competition inside a championship.
//!
//! A category owns its roster and match list and runs the season
//! lifecycle end to end:
//! - Roster assembly, from given names or auto-generated ones
//! - Fixture generation through the scheduler
//! - Result registration, overwriting earlier results cleanly
//! - Penalties, standings, per-team statistics, and schedule edits
//! - The knockout stage for the top four

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bracket;
use crate::models::{LegType, Match, PointRules, Team};
use crate::scheduler::FixtureAssembler;
use crate::standings;
use crate::stats::{self, TeamStatistics};
use crate::validation::{self, ValidationError, ValidationResult};

/// A competition within a championship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within its championship.
    pub name: String,
    /// Home-and-away cycles per season.
    pub rounds: u32,
    /// Point rules applied to results in this category.
    pub rules: PointRules,
    /// Roster.
    pub teams: Vec<Team>,
    /// Season calendar, league and knockout matches alike.
    pub matches: Vec<Match>,
    /// True once a fixture has been generated.
    pub fixture_generated: bool,
}

impl Category {
    /// Creates an empty category after validating its configuration.
    pub fn new(
        name: impl Into<String>,
        rounds: u32,
        rules: PointRules,
    ) -> Result<Self, Vec<ValidationError>> {
        let name = name.into();
        validation::validate_category_config(&name, rounds, &rules)?;
        Ok(Self {
            name: name.trim().to_string(),
            rounds,
            rules,
            teams: Vec::new(),
            matches: Vec::new(),
            fixture_generated: false,
        })
    }

    // ==================== roster ====================

    /// Adds a batch of teams to the roster.
    ///
    /// The whole batch is validated first; on any error nothing is
    /// added. Names already on the roster are skipped (compared
    /// case-insensitively), so re-adding a team is harmless. Names are
    /// stored trimmed.
    pub fn add_teams<S: Into<String>>(&mut self, names: Vec<S>) -> ValidationResult {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        validation::validate_team_batch(&self.teams, &names)?;
        let mut added = 0;
        for name in &names {
            let trimmed = name.trim();
            let key = trimmed.to_lowercase();
            if self.teams.iter().any(|t| t.name.to_lowercase() == key) {
                continue;
            }
            self.teams.push(Team::new(trimmed));
            added += 1;
        }
        info!(
            "category {}: added {added} of {} teams",
            self.name,
            names.len()
        );
        Ok(())
    }

    /// Adds `count` auto-named teams, numbered after the existing
    /// roster.
    pub fn add_generated_teams(&mut self, count: usize) -> ValidationResult {
        let start = self.teams.len() + 1;
        let names: Vec<String> = (0..count)
            .map(|i| format!("{} Team {}", self.name, start + i))
            .collect();
        self.add_teams(names)
    }

    /// Looks up a team by exact name.
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    // ==================== fixture ====================

    /// Generates the season fixture with the global RNG.
    pub fn generate_fixture(&mut self) -> Result<(), Vec<ValidationError>> {
        self.generate_fixture_with_rng(&mut rand::rng())
    }

    /// Generates the season fixture with the given RNG.
    ///
    /// Replaces any existing calendar, knockout matches included, and
    /// resets every team record to zero.
    pub fn generate_fixture_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), Vec<ValidationError>> {
        let names: Vec<String> = self.teams.iter().map(|t| t.name.clone()).collect();
        self.matches = FixtureAssembler::new(self.rounds).assemble(&names, rng)?;
        for team in &mut self.teams {
            team.reset_record(&self.rules);
        }
        self.fixture_generated = true;
        info!(
            "category {}: generated fixture with {} matches",
            self.name,
            self.matches.len()
        );
        Ok(())
    }

    // ==================== results ====================

    /// Registers a match result.
    ///
    /// The scores follow the argument order, not home and away: the
    /// first score belongs to `team_a` wherever it plays. Passing
    /// `None` for the leg matches the first leg found for the pair and
    /// round. Re-registering a played match reverts its old result
    /// from both team records before applying the new one.
    ///
    /// Returns `Ok(false)` when no such match exists; nothing changes.
    pub fn register_result(
        &mut self,
        team_a: &str,
        team_b: &str,
        round: u32,
        leg: Option<LegType>,
        score_a: u32,
        score_b: u32,
    ) -> Result<bool, Vec<ValidationError>> {
        validation::validate_scores(score_a, score_b)?;

        let Some(idx) = self.find_match_index(team_a, team_b, round, leg) else {
            debug!(
                "category {}: no match {team_a} vs {team_b} in round {round}",
                self.name
            );
            return Ok(false);
        };

        let (home_score, away_score) = if self.matches[idx].home == team_a {
            (score_a, score_b)
        } else {
            (score_b, score_a)
        };

        if self.matches[idx].played {
            debug!(
                "category {}: overwriting result of {} vs {}",
                self.name, self.matches[idx].home, self.matches[idx].away
            );
            self.revert_match(idx);
        }

        self.matches[idx].set_result(home_score, away_score);

        let home = self.matches[idx].home.clone();
        let away = self.matches[idx].away.clone();
        let rules = self.rules;
        if let Some(team) = self.team_mut(&home) {
            team.record_result(home_score, away_score, &rules);
        }
        if let Some(team) = self.team_mut(&away) {
            team.record_result(away_score, home_score, &rules);
        }
        debug!(
            "category {}: registered {home} {home_score}-{away_score} {away}",
            self.name
        );
        Ok(true)
    }

    /// Applies a penalty (or bonus, when negative) to a team.
    ///
    /// Returns `Ok(false)` when the team is not on the roster.
    pub fn apply_penalty(
        &mut self,
        team_name: &str,
        points: i32,
    ) -> Result<bool, Vec<ValidationError>> {
        validation::validate_penalty(points)?;
        let rules = self.rules;
        match self.team_mut(team_name) {
            Some(team) => {
                team.apply_penalty(points, &rules);
                info!(
                    "category {}: penalty of {points} points applied to {team_name}",
                    self.name
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sets the date and time of a match. Returns false when no such
    /// match exists.
    pub fn update_schedule(
        &mut self,
        team_a: &str,
        team_b: &str,
        round: u32,
        leg: Option<LegType>,
        date: &str,
        time: &str,
    ) -> bool {
        match self.find_match_index(team_a, team_b, round, leg) {
            Some(idx) => {
                self.matches[idx].set_schedule(date, time);
                true
            }
            None => false,
        }
    }

    // ==================== views ====================

    /// Returns the league table, best team first.
    pub fn standings(&self) -> Vec<&Team> {
        standings::table(&self.teams)
    }

    /// Returns all matches of the given round.
    pub fn matches_by_round(&self, round: u32) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.round == round).collect()
    }

    /// Returns all matches a team is involved in.
    pub fn matches_by_team(&self, team: &str) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.involves(team)).collect()
    }

    /// Derived season statistics for one team. `None` when the team is
    /// not on the roster.
    pub fn team_statistics(&self, team: &str) -> Option<TeamStatistics> {
        stats::team_statistics(self, team)
    }

    /// True when a fixture exists and every league match is played.
    /// Knockout matches do not count.
    pub fn regular_season_complete(&self) -> bool {
        let mut any = false;
        for m in &self.matches {
            if m.is_knockout() {
                continue;
            }
            if !m.played {
                return false;
            }
            any = true;
        }
        any
    }

    // ==================== knockout stage ====================

    /// True when the quadrangular can be generated.
    pub fn can_generate_quadrangular(&self) -> bool {
        bracket::can_generate_quadrangular(self)
    }

    /// Creates the semifinal pair from the top four. Returns false
    /// when the season is not finished or the roster is too small.
    pub fn generate_quadrangular(&mut self) -> bool {
        bracket::generate_quadrangular(self)
    }

    /// True when the final can be generated.
    pub fn can_generate_final(&self) -> bool {
        bracket::can_generate_final(self)
    }

    /// Creates the final between the semifinal winners. Returns false
    /// until both semifinals have a winner.
    pub fn generate_final(&mut self) -> bool {
        bracket::generate_final(self)
    }

    // ==================== internals ====================

    fn team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name == name)
    }

    fn find_match_index(
        &self,
        team_a: &str,
        team_b: &str,
        round: u32,
        leg: Option<LegType>,
    ) -> Option<usize> {
        self.matches.iter().position(|m| {
            m.round == round && leg.map_or(true, |l| m.leg == l) && m.pairs(team_a, team_b)
        })
    }

    /// Rolls a played match back out of both team records.
    fn revert_match(&mut self, idx: usize) {
        let (Some(home_score), Some(away_score)) =
            (self.matches[idx].home_score, self.matches[idx].away_score)
        else {
            return;
        };
        let home = self.matches[idx].home.clone();
        let away = self.matches[idx].away.clone();
        let rules = self.rules;
        if let Some(team) = self.team_mut(&home) {
            team.revert_result(home_score, away_score, &rules);
        }
        if let Some(team) = self.team_mut(&away) {
            team.revert_result(away_score, home_score, &rules);
        }
    }

    /// Drops every knockout match, rolling played ones back out of the
    /// team records first.
    pub(crate) fn clear_knockout_stage(&mut self) {
        for idx in 0..self.matches.len() {
            if self.matches[idx].is_knockout() {
                self.revert_match(idx);
            }
        }
        self.matches.retain(|m| !m.is_knockout());
    }

    /// Drops the final, rolling a played one back out of the team
    /// records first.
    pub(crate) fn clear_final(&mut self) {
        for idx in 0..self.matches.len() {
            if self.matches[idx].leg == LegType::Final {
                self.revert_match(idx);
            }
        }
        self.matches.retain(|m| m.leg != LegType::Final);
    }
}
