//! Input validation for tournament configuration and results.
//!
//! Checks configuration and user input before any state changes:
//! - Name lengths (championship, category, team)
//! - Rounds and point-rule bounds
//! - Team batch size, roster size, duplicates within a batch
//!   (case-insensitive)
//! - Score bounds and the no-tie rule (only 0-0 may be equal)
//! - Penalty bounds
//!
//! Validators collect every problem they find, so a caller can report
//! all of them in one pass.

use thiserror::Error;

use crate::models::{PointRules, Team};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Minimum championship name length (trimmed).
pub const MIN_CHAMPIONSHIP_NAME: usize = 3;
/// Maximum championship name length (trimmed).
pub const MAX_CHAMPIONSHIP_NAME: usize = 100;
/// Minimum category name length (trimmed).
pub const MIN_CATEGORY_NAME: usize = 2;
/// Maximum category name length (trimmed).
pub const MAX_CATEGORY_NAME: usize = 50;
/// Maximum team name length (trimmed).
pub const MAX_TEAM_NAME: usize = 50;
/// Minimum teams per batch and per roster.
pub const MIN_TEAMS: usize = 2;
/// Maximum teams per roster.
pub const MAX_TEAMS: usize = 20;
/// Minimum home-and-away cycles.
pub const MIN_ROUNDS: u32 = 1;
/// Maximum home-and-away cycles.
pub const MAX_ROUNDS: u32 = 10;
/// Maximum points awarded per win.
pub const MAX_POINTS_PER_WIN: i32 = 10;
/// Maximum points awarded per loss.
pub const MAX_POINTS_PER_LOSS: i32 = 5;
/// Maximum score a team can post in one match.
pub const MAX_SCORE: u32 = 200;
/// Penalty magnitude bound (inclusive, both signs).
pub const MAX_PENALTY: i32 = 50;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A name is blank or outside its length bounds.
    NameLength,
    /// Two teams share a name (compared case-insensitively).
    DuplicateTeam,
    /// A team batch or roster is outside the allowed size.
    TeamCount,
    /// Rounds outside the allowed range.
    RoundsOutOfRange,
    /// Point rules outside the allowed range.
    PointsOutOfRange,
    /// A score outside the allowed range.
    ScoreOutOfRange,
    /// Equal non-zero scores; the sport has no ties except 0-0.
    TiedScore,
    /// A penalty outside the allowed range.
    PenaltyOutOfRange,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a championship configuration.
///
/// Checks:
/// 1. Name trimmed length within 3..=100
/// 2. Rounds within 1..=10
/// 3. Points per win within 0..=10, points per loss within 0..=5
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_championship_config(name: &str, rounds: u32, rules: &PointRules) -> ValidationResult {
    let mut errors = Vec::new();
    check_name(
        name,
        "Championship name",
        MIN_CHAMPIONSHIP_NAME,
        MAX_CHAMPIONSHIP_NAME,
        &mut errors,
    );
    check_rounds(rounds, &mut errors);
    check_point_rules(rules, &mut errors);
    finish(errors)
}

/// Validates a category configuration (name 2..=50, same rounds and
/// point-rule bounds as a championship).
pub fn validate_category_config(name: &str, rounds: u32, rules: &PointRules) -> ValidationResult {
    let mut errors = Vec::new();
    check_name(
        name,
        "Category name",
        MIN_CATEGORY_NAME,
        MAX_CATEGORY_NAME,
        &mut errors,
    );
    check_rounds(rounds, &mut errors);
    check_point_rules(rules, &mut errors);
    finish(errors)
}

/// Validates a batch of team names against an existing roster.
///
/// Names already on the roster are not errors; `add_teams` skips them.
/// Checks:
/// 1. Batch size within 2..=20
/// 2. Roster size after adding the genuinely new names at most 20
/// 3. Every name trimmed non-empty and at most 50 characters
/// 4. No duplicates within the batch (case-insensitive)
pub fn validate_team_batch(existing: &[Team], incoming: &[String]) -> ValidationResult {
    let mut errors = Vec::new();

    if incoming.len() < MIN_TEAMS || incoming.len() > MAX_TEAMS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TeamCount,
            format!(
                "Team batch must have {MIN_TEAMS}-{MAX_TEAMS} names, got {}",
                incoming.len()
            ),
        ));
    }

    let roster: Vec<String> = existing.iter().map(|t| t.name.to_lowercase()).collect();
    let mut seen: Vec<String> = Vec::new();
    let mut new_names = 0;
    for name in incoming {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_TEAM_NAME {
            errors.push(ValidationError::new(
                ValidationErrorKind::NameLength,
                format!("Team name must be 1-{MAX_TEAM_NAME} characters: '{name}'"),
            ));
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeam,
                format!("Duplicate team name: {trimmed}"),
            ));
            continue;
        }
        if !roster.contains(&key) {
            new_names += 1;
        }
        seen.push(key);
    }

    if existing.len() + new_names > MAX_TEAMS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TeamCount,
            format!(
                "Roster would grow to {} teams; the maximum is {MAX_TEAMS}",
                existing.len() + new_names
            ),
        ));
    }

    finish(errors)
}

/// Validates a pair of match scores.
///
/// Scores must be within 0..=200 and must not be equal unless both are
/// zero; the sport has no ties.
pub fn validate_scores(score_a: u32, score_b: u32) -> ValidationResult {
    let mut errors = Vec::new();
    for score in [score_a, score_b] {
        if score > MAX_SCORE {
            errors.push(ValidationError::new(
                ValidationErrorKind::ScoreOutOfRange,
                format!("Score {score} exceeds the maximum of {MAX_SCORE}"),
            ));
        }
    }
    if score_a == score_b && score_a != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TiedScore,
            format!("Equal scores are only allowed at 0-0, got {score_a}-{score_b}"),
        ));
    }
    finish(errors)
}

/// Validates a penalty adjustment (within -50..=50).
pub fn validate_penalty(points: i32) -> ValidationResult {
    if points < -MAX_PENALTY || points > MAX_PENALTY {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::PenaltyOutOfRange,
            format!("Penalty must be between -{MAX_PENALTY} and {MAX_PENALTY}, got {points}"),
        )]);
    }
    Ok(())
}

fn check_name(name: &str, label: &str, min: usize, max: usize, errors: &mut Vec<ValidationError>) {
    let len = name.trim().chars().count();
    if len < min || len > max {
        errors.push(ValidationError::new(
            ValidationErrorKind::NameLength,
            format!("{label} must be {min}-{max} characters, got {len}"),
        ));
    }
}

fn check_rounds(rounds: u32, errors: &mut Vec<ValidationError>) {
    if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
        errors.push(ValidationError::new(
            ValidationErrorKind::RoundsOutOfRange,
            format!("Rounds must be between {MIN_ROUNDS} and {MAX_ROUNDS}, got {rounds}"),
        ));
    }
}

fn check_point_rules(rules: &PointRules, errors: &mut Vec<ValidationError>) {
    if rules.points_per_win < 0 || rules.points_per_win > MAX_POINTS_PER_WIN {
        errors.push(ValidationError::new(
            ValidationErrorKind::PointsOutOfRange,
            format!(
                "Points per win must be between 0 and {MAX_POINTS_PER_WIN}, got {}",
                rules.points_per_win
            ),
        ));
    }
    if rules.points_per_loss < 0 || rules.points_per_loss > MAX_POINTS_PER_LOSS {
        errors.push(ValidationError::new(
            ValidationErrorKind::PointsOutOfRange,
            format!(
                "Points per loss must be between 0 and {MAX_POINTS_PER_LOSS}, got {}",
                rules.points_per_loss
            ),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
