//! League table ordering.
//!
//! Ranks teams by points, then score difference, then points scored,
//! with an alphabetical tiebreak so equal records always list in a
//! stable order.

use std::cmp::Ordering;

use crate::models::Team;

/// Compares two teams for table order (best first).
pub fn compare(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.score_difference().cmp(&a.score_difference()))
        .then_with(|| b.points_for.cmp(&a.points_for))
        .then_with(|| a.name.cmp(&b.name))
}

/// Returns the teams sorted into table order.
pub fn table(teams: &[Team]) -> Vec<&Team> {
    let mut ranked: Vec<&Team> = teams.iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointRules;

    fn team(name: &str, points: i32, points_for: u32, points_against: u32) -> Team {
        let mut t = Team::new(name);
        t.points = points;
        t.points_for = points_for;
        t.points_against = points_against;
        t
    }

    #[test]
    fn test_points_decide_first() {
        let a = team("Lions", 6, 100, 90);
        let b = team("Hawks", 4, 200, 100);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_score_difference_breaks_points_tie() {
        let a = team("Lions", 6, 100, 90);
        let b = team("Hawks", 6, 120, 80);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_points_for_breaks_difference_tie() {
        let a = team("Lions", 6, 90, 80);
        let b = team("Hawks", 6, 110, 100);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_name_breaks_full_tie() {
        let a = team("Lions", 6, 100, 90);
        let b = team("Hawks", 6, 100, 90);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_table_orders_best_first() {
        let teams = vec![
            team("Lions", 2, 80, 90),
            team("Hawks", 6, 120, 70),
            team("Bears", 4, 100, 100),
        ];

        let ranked = table(&teams);
        let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Hawks", "Bears", "Lions"]);
    }

    #[test]
    fn test_penalty_moves_team_down() {
        let rules = PointRules::default();
        let mut a = Team::new("Lions");
        let mut b = Team::new("Hawks");
        a.record_result(90, 70, &rules);
        b.record_result(85, 60, &rules);
        a.apply_penalty(1, &rules);

        let teams = vec![a, b];
        let ranked = table(&teams);
        assert_eq!(ranked[0].name, "Hawks");
    }
}
