//! Knockout stage for the top four.
//!
//! Once the regular season is played out, the top four of the table
//! enter a quadrangular: first plays fourth and second plays third,
//! and the winners meet in the final. Knockout matches carry a
//! sentinel round number so they never collide with league rounds.

use log::info;

use crate::models::{Category, LegType, Match};
use crate::scheduler::{FIRST_KICKOFF, SECOND_KICKOFF};

/// Round number assigned to knockout matches.
pub const KNOCKOUT_ROUND: u32 = 999;
/// Matchday of the two semifinals.
pub const SEMIFINAL_MATCHDAY: u32 = 1;
/// Matchday of the final.
pub const FINAL_MATCHDAY: u32 = 2;

/// True when a quadrangular can be generated: the regular season is
/// complete, at least four teams compete, and no bracket exists yet.
pub fn can_generate_quadrangular(category: &Category) -> bool {
    category.regular_season_complete()
        && category.teams.len() >= 4
        && !category.matches.iter().any(|m| m.is_knockout())
}

/// Creates the semifinals from the current standings.
///
/// Any existing knockout matches are discarded first, with played
/// ones reverted from the team records, so calling this again
/// rebuilds the bracket from a clean table. Returns false when the
/// regular season is unfinished or fewer than four teams compete.
pub fn generate_quadrangular(category: &mut Category) -> bool {
    if !category.regular_season_complete() || category.teams.len() < 4 {
        return false;
    }

    category.clear_knockout_stage();

    let seeds: Vec<String> = category
        .standings()
        .into_iter()
        .take(4)
        .map(|t| t.name.clone())
        .collect();

    category.matches.push(
        Match::new(
            seeds[0].clone(),
            seeds[3].clone(),
            KNOCKOUT_ROUND,
            LegType::Semifinal,
            SEMIFINAL_MATCHDAY,
        )
        .with_time(FIRST_KICKOFF),
    );
    category.matches.push(
        Match::new(
            seeds[1].clone(),
            seeds[2].clone(),
            KNOCKOUT_ROUND,
            LegType::Semifinal,
            SEMIFINAL_MATCHDAY,
        )
        .with_time(SECOND_KICKOFF),
    );

    info!(
        "category {}: semifinals set, {} vs {} and {} vs {}",
        category.name, seeds[0], seeds[3], seeds[1], seeds[2]
    );
    true
}

/// True when both semifinals exist, are played, and have a winner.
pub fn can_generate_final(category: &Category) -> bool {
    let semis = semifinals(category);
    semis.len() == 2 && semis.iter().all(|m| m.played && m.winner().is_some())
}

/// Creates the final between the semifinal winners.
///
/// An existing final is discarded first, a played one reverted from
/// the team records. Returns false until both semifinals have a
/// winner; a drawn semifinal blocks the final.
pub fn generate_final(category: &mut Category) -> bool {
    if !can_generate_final(category) {
        return false;
    }

    category.clear_final();

    let finalists: Vec<String> = semifinals(category)
        .into_iter()
        .filter_map(|m| m.winner())
        .map(str::to_string)
        .collect();

    category.matches.push(
        Match::new(
            finalists[0].clone(),
            finalists[1].clone(),
            KNOCKOUT_ROUND,
            LegType::Final,
            FINAL_MATCHDAY,
        )
        .with_time(FIRST_KICKOFF),
    );

    info!(
        "category {}: final set, {} vs {}",
        category.name, finalists[0], finalists[1]
    );
    true
}

fn semifinals(category: &Category) -> Vec<&Match> {
    category
        .matches
        .iter()
        .filter(|m| m.leg == LegType::Semifinal)
        .collect()
}
