//! The championship aggregate.
//!
//! A championship owns a set of categories and forwards season
//! operations to them by name. Categories inherit the championship
//! rounds and point rules unless created with their own, and every
//! mutation is addressed to a category, so lookups that miss report
//! `false` or `None` instead of failing.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Category, LegType, PointRules, Team};
use crate::stats::TeamStatistics;
use crate::validation::{self, ValidationError};

/// A championship with one or more categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Championship {
    /// Championship name.
    pub name: String,
    /// Default home-and-away cycles for new categories.
    pub rounds: u32,
    /// Default point rules for new categories.
    pub rules: PointRules,
    /// Categories, in creation order.
    pub categories: Vec<Category>,
}

impl Championship {
    /// Creates an empty championship after validating its
    /// configuration.
    pub fn new(
        name: impl Into<String>,
        rounds: u32,
        rules: PointRules,
    ) -> Result<Self, Vec<ValidationError>> {
        let name = name.into();
        validation::validate_championship_config(&name, rounds, &rules)?;
        Ok(Self {
            name: name.trim().to_string(),
            rounds,
            rules,
            categories: Vec::new(),
        })
    }

    // ==================== categories ====================

    /// Adds an empty category inheriting the championship defaults.
    ///
    /// Returns `Ok(false)` when a category of that name exists.
    pub fn add_category(&mut self, name: impl Into<String>) -> Result<bool, Vec<ValidationError>> {
        self.add_category_with_teams(name, Vec::<String>::new(), None)
    }

    /// Adds a category with an initial team batch.
    ///
    /// `rules` overrides the championship point rules for this
    /// category; `None` inherits them. Returns `Ok(false)` when a
    /// category of that name exists. On a validation error nothing is
    /// added.
    pub fn add_category_with_teams<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        teams: Vec<S>,
        rules: Option<PointRules>,
    ) -> Result<bool, Vec<ValidationError>> {
        let name = name.into();
        if self.category(name.trim()).is_some() {
            return Ok(false);
        }
        let mut category = Category::new(name, self.rounds, rules.unwrap_or(self.rules))?;
        if !teams.is_empty() {
            category.add_teams(teams)?;
        }
        info!("championship {}: added category {}", self.name, category.name);
        self.categories.push(category);
        Ok(true)
    }

    /// Adds a category filled with `count` auto-named teams.
    pub fn add_category_with_team_count(
        &mut self,
        name: impl Into<String>,
        count: usize,
        rules: Option<PointRules>,
    ) -> Result<bool, Vec<ValidationError>> {
        let name = name.into();
        if self.category(name.trim()).is_some() {
            return Ok(false);
        }
        let mut category = Category::new(name, self.rounds, rules.unwrap_or(self.rules))?;
        category.add_generated_teams(count)?;
        info!("championship {}: added category {}", self.name, category.name);
        self.categories.push(category);
        Ok(true)
    }

    /// Removes a category and everything it owns.
    ///
    /// Returns `false` when no category of that name exists.
    pub fn remove_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.categories.len();
        self.categories.retain(|c| c.name != name);
        if self.categories.len() < before {
            info!("championship {}: removed category {name}", self.name);
            true
        } else {
            false
        }
    }

    /// Looks up a category by exact name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Looks up a category for mutation.
    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Category names in creation order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    // ==================== season operations ====================

    /// Generates the fixture of a category with the global RNG.
    ///
    /// Returns `Ok(false)` when the category does not exist.
    pub fn generate_fixture(&mut self, category: &str) -> Result<bool, Vec<ValidationError>> {
        match self.category_mut(category) {
            Some(c) => {
                c.generate_fixture()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Generates the fixture of a category with the given RNG.
    pub fn generate_fixture_with_rng<R: Rng>(
        &mut self,
        category: &str,
        rng: &mut R,
    ) -> Result<bool, Vec<ValidationError>> {
        match self.category_mut(category) {
            Some(c) => {
                c.generate_fixture_with_rng(rng)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Registers a result in a category. Returns `Ok(false)` when the
    /// category or the match does not exist.
    #[allow(clippy::too_many_arguments)]
    pub fn register_result(
        &mut self,
        category: &str,
        team_a: &str,
        team_b: &str,
        round: u32,
        leg: Option<LegType>,
        score_a: u32,
        score_b: u32,
    ) -> Result<bool, Vec<ValidationError>> {
        match self.category_mut(category) {
            Some(c) => c.register_result(team_a, team_b, round, leg, score_a, score_b),
            None => Ok(false),
        }
    }

    /// Applies a penalty to a team in a category.
    pub fn apply_penalty(
        &mut self,
        category: &str,
        team: &str,
        points: i32,
    ) -> Result<bool, Vec<ValidationError>> {
        match self.category_mut(category) {
            Some(c) => c.apply_penalty(team, points),
            None => Ok(false),
        }
    }

    /// Sets the date and time of a match in a category.
    #[allow(clippy::too_many_arguments)]
    pub fn update_schedule(
        &mut self,
        category: &str,
        team_a: &str,
        team_b: &str,
        round: u32,
        leg: Option<LegType>,
        date: &str,
        time: &str,
    ) -> bool {
        self.category_mut(category)
            .map_or(false, |c| c.update_schedule(team_a, team_b, round, leg, date, time))
    }

    /// Returns the standings of a category, best team first.
    pub fn standings(&self, category: &str) -> Option<Vec<&Team>> {
        self.category(category).map(|c| c.standings())
    }

    /// Derived season statistics for a team in a category. `None` when
    /// the category or the team does not exist.
    pub fn team_statistics(&self, category: &str, team: &str) -> Option<TeamStatistics> {
        self.category(category).and_then(|c| c.team_statistics(team))
    }

    // ==================== knockout stage ====================

    /// True when the category exists and its quadrangular can be
    /// generated.
    pub fn can_generate_quadrangular(&self, category: &str) -> bool {
        self.category(category)
            .map_or(false, |c| c.can_generate_quadrangular())
    }

    /// Generates the quadrangular of a category.
    pub fn generate_quadrangular(&mut self, category: &str) -> bool {
        self.category_mut(category)
            .map_or(false, |c| c.generate_quadrangular())
    }

    /// True when the category exists and its final can be generated.
    pub fn can_generate_final(&self, category: &str) -> bool {
        self.category(category)
            .map_or(false, |c| c.can_generate_final())
    }

    /// Generates the final of a category.
    pub fn generate_final(&mut self, category: &str) -> bool {
        self.category_mut(category)
            .map_or(false, |c| c.generate_final())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::KNOCKOUT_ROUND;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const ROSTER: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];

    fn sample_championship() -> Championship {
        let mut championship =
            Championship::new("City League", 1, PointRules::default()).unwrap();
        championship
            .add_category_with_teams("Senior", ROSTER.to_vec(), None)
            .unwrap();
        championship
    }

    /// Plays out the Senior season; earlier ROSTER teams win 90-70.
    fn play_senior_season(championship: &mut Championship) {
        let keys: Vec<(String, String, u32, LegType)> = championship
            .category("Senior")
            .unwrap()
            .matches
            .iter()
            .map(|m| (m.home.clone(), m.away.clone(), m.round, m.leg))
            .collect();
        for (home, away, round, leg) in keys {
            let home_rank = ROSTER.iter().position(|n| *n == home).unwrap();
            let away_rank = ROSTER.iter().position(|n| *n == away).unwrap();
            let (home_score, away_score) = if home_rank < away_rank {
                (90, 70)
            } else {
                (70, 90)
            };
            championship
                .register_result("Senior", &home, &away, round, Some(leg), home_score, away_score)
                .unwrap();
        }
    }

    #[test]
    fn test_new_collects_configuration_errors() {
        assert!(Championship::new("City League", 1, PointRules::default()).is_ok());

        let errors = Championship::new("CL", 0, PointRules::new(11, -1)).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NameLength));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RoundsOutOfRange));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PointsOutOfRange));
    }

    #[test]
    fn test_add_category_rejects_duplicates() {
        let mut championship = sample_championship();
        assert!(!championship.add_category("Senior").unwrap());
        assert!(!championship
            .add_category_with_teams("  Senior  ", ROSTER.to_vec(), None)
            .unwrap());
        assert_eq!(championship.category_names(), vec!["Senior"]);
    }

    #[test]
    fn test_category_rules_inherit_and_override() {
        let mut championship =
            Championship::new("City League", 2, PointRules::new(3, 1)).unwrap();
        championship.add_category("Senior").unwrap();
        championship
            .add_category_with_teams("Junior", ROSTER.to_vec(), Some(PointRules::new(2, 0)))
            .unwrap();

        let senior = championship.category("Senior").unwrap();
        assert_eq!(senior.rules, PointRules::new(3, 1));
        assert_eq!(senior.rounds, 2);

        let junior = championship.category("Junior").unwrap();
        assert_eq!(junior.rules, PointRules::new(2, 0));
    }

    #[test]
    fn test_add_category_with_team_count() {
        let mut championship =
            Championship::new("City League", 1, PointRules::default()).unwrap();
        championship
            .add_category_with_team_count("Junior", 4, None)
            .unwrap();

        let junior = championship.category("Junior").unwrap();
        assert_eq!(junior.teams.len(), 4);
        assert_eq!(junior.teams[0].name, "Junior Team 1");
        assert_eq!(junior.teams[3].name, "Junior Team 4");
    }

    #[test]
    fn test_failed_category_is_not_added() {
        let mut championship =
            Championship::new("City League", 1, PointRules::default()).unwrap();
        let errors = championship
            .add_category_with_teams("Junior", vec!["Alpha", "ALPHA"], None)
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTeam));
        assert!(championship.categories.is_empty());
    }

    #[test]
    fn test_operations_on_missing_category() {
        let mut championship = sample_championship();

        assert!(!championship.generate_fixture("Nope").unwrap());
        assert!(!championship
            .register_result("Nope", "Alpha", "Beta", 1, None, 80, 60)
            .unwrap());
        assert!(!championship.apply_penalty("Nope", "Alpha", 3).unwrap());
        assert!(!championship.update_schedule("Nope", "Alpha", "Beta", 1, None, "2026-03-14", "20:00"));
        assert!(championship.standings("Nope").is_none());
        assert!(championship.team_statistics("Nope", "Alpha").is_none());
        assert!(!championship.can_generate_quadrangular("Nope"));
        assert!(!championship.generate_quadrangular("Nope"));
        assert!(!championship.can_generate_final("Nope"));
        assert!(!championship.generate_final("Nope"));
    }

    #[test]
    fn test_remove_category() {
        let mut championship = sample_championship();
        championship.add_category("Junior").unwrap();

        assert!(championship.remove_category("Senior"));
        assert_eq!(championship.category_names(), vec!["Junior"]);
        assert!(!championship.remove_category("Senior"));

        // The name is free for reuse afterwards.
        assert!(championship.add_category("Senior").unwrap());
    }

    #[test]
    fn test_full_season_through_the_championship() {
        let mut championship = sample_championship();
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(championship
            .generate_fixture_with_rng("Senior", &mut rng)
            .unwrap());
        assert_eq!(championship.category("Senior").unwrap().matches.len(), 12);

        play_senior_season(&mut championship);

        let names: Vec<String> = championship
            .standings("Senior")
            .unwrap()
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, ROSTER.to_vec());

        assert!(championship.can_generate_quadrangular("Senior"));
        assert!(championship.generate_quadrangular("Senior"));
        championship
            .register_result(
                "Senior",
                "Alpha",
                "Delta",
                KNOCKOUT_ROUND,
                Some(LegType::Semifinal),
                80,
                60,
            )
            .unwrap();
        championship
            .register_result(
                "Senior",
                "Beta",
                "Gamma",
                KNOCKOUT_ROUND,
                Some(LegType::Semifinal),
                72,
                68,
            )
            .unwrap();

        assert!(championship.can_generate_final("Senior"));
        assert!(championship.generate_final("Senior"));
        championship
            .register_result(
                "Senior",
                "Alpha",
                "Beta",
                KNOCKOUT_ROUND,
                Some(LegType::Final),
                88,
                79,
            )
            .unwrap();

        let final_match = championship
            .category("Senior")
            .unwrap()
            .matches
            .iter()
            .find(|m| m.leg == LegType::Final)
            .unwrap()
            .clone();
        assert_eq!(final_match.winner(), Some("Alpha"));

        // League plus semifinal plus final, all won.
        let stats = championship.team_statistics("Senior", "Alpha").unwrap();
        assert_eq!(stats.played, 8);
        assert_eq!(stats.won, 8);
        assert_eq!(stats.win_streak, 8);
        assert_eq!(stats.home_record.wins + stats.away_record.wins, 8);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut championship = sample_championship();
        let mut rng = SmallRng::seed_from_u64(42);
        championship
            .generate_fixture_with_rng("Senior", &mut rng)
            .unwrap();
        play_senior_season(&mut championship);
        championship.generate_quadrangular("Senior");

        let json = serde_json::to_string(&championship).unwrap();
        let restored: Championship = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, championship);
    }
}
