//! Matchday packing under venue and fairness constraints.
//!
//! Arranges a set of pairings into a calendar of matchdays:
//! - At most two matches per matchday (one court, two time slots)
//! - No team plays twice on the same matchday
//! - Teams that sat out the previous matchday are preferred
//! - Matchday loads stay balanced across teams
//!
//! The first two rules are hard. The rest are relaxed in order when no
//! conforming candidate remains:
//! 1. Prefer pairings whose teams both rested the previous matchday
//! 2. Allow back-to-back appearances
//! 3. Re-home a match from an earlier full matchday into the current one
//! 4. Accept an underfilled matchday and log a warning
//!
//! # Algorithm
//! 1. Shuffle the pairings
//! 2. Fill each matchday greedily, scoring candidates by rest, then by
//!    how many matchdays each team already has, then by shuffled order
//! 3. If a matchday strands with one match while pairings remain, raid
//!    an earlier full matchday for a compatible exchange
//!
//! # Reference
//! Rasmussen, R. V., & Trick, M. A. (2008). Round robin scheduling -
//! a survey. European Journal of Operational Research, 188(3), 617-636.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::scheduler::pairings::Pairing;

/// Matches a single court can host per matchday.
pub const MATCHES_PER_MATCHDAY: usize = 2;

/// Packs pairings into matchdays.
///
/// Every pairing is placed exactly once and no team appears twice on
/// one matchday. For four or more teams, every matchday except
/// possibly the last holds exactly [`MATCHES_PER_MATCHDAY`] matches;
/// the last is a singleton when the pairing count is odd. Three teams
/// degenerate to singleton matchdays, since every pairing shares a
/// team with every other.
///
/// The same seed and pairing list reproduce the same calendar.
pub fn pack_matchdays<R: Rng>(
    pairings: &[Pairing],
    team_count: usize,
    rng: &mut R,
) -> Vec<Vec<Pairing>> {
    let mut remaining = pairings.to_vec();
    remaining.shuffle(rng);

    let mut matchdays: Vec<Vec<Pairing>> = Vec::new();
    let mut scheduled = vec![0u32; team_count];
    let mut played_previous = vec![false; team_count];

    while !remaining.is_empty() {
        let mut day: Vec<Pairing> = Vec::with_capacity(MATCHES_PER_MATCHDAY);
        while day.len() < MATCHES_PER_MATCHDAY {
            let Some(idx) = pick_pairing(&remaining, &day, &played_previous, &scheduled) else {
                break;
            };
            let pairing = remaining.remove(idx);
            scheduled[pairing.home] += 1;
            scheduled[pairing.away] += 1;
            day.push(pairing);
        }

        if day.len() < MATCHES_PER_MATCHDAY && !remaining.is_empty() {
            if rehome_into(&mut matchdays, &mut day, &mut remaining, &mut scheduled) {
                debug!(
                    "matchday {}: filled by re-homing a match from an earlier matchday",
                    matchdays.len() + 1
                );
            } else {
                warn!(
                    "matchday {} underfilled with {} pairing(s) still unplaced",
                    matchdays.len() + 1,
                    remaining.len()
                );
            }
        }

        played_previous.fill(false);
        for pairing in &day {
            played_previous[pairing.home] = true;
            played_previous[pairing.away] = true;
        }
        matchdays.push(day);
    }

    matchdays
}

/// Selects the best placeable pairing for the day being filled.
///
/// Candidates must not share a team with a match already on the day.
/// Among candidates, fewest teams that played the previous matchday
/// wins, then lowest combined matchday count, then shuffled order.
fn pick_pairing(
    remaining: &[Pairing],
    day: &[Pairing],
    played_previous: &[bool],
    scheduled: &[u32],
) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .filter(|&(_, p)| !day.iter().any(|placed| placed.shares_team(p)))
        .min_by_key(|&(_, p)| {
            let tired =
                usize::from(played_previous[p.home]) + usize::from(played_previous[p.away]);
            let load = scheduled[p.home] + scheduled[p.away];
            (tired, load)
        })
        .map(|(idx, _)| idx)
}

/// Repairs a stranded matchday by exchanging with an earlier one.
///
/// Scans earlier full matchdays, latest first, for a donor match with
/// no team in common with the stranded one. The donor moves into the
/// current day; its old slot is backfilled with an unplaced pairing
/// compatible with the match left behind. Returns false if no exchange
/// exists.
fn rehome_into(
    matchdays: &mut [Vec<Pairing>],
    day: &mut Vec<Pairing>,
    remaining: &mut Vec<Pairing>,
    scheduled: &mut [u32],
) -> bool {
    // The day holds exactly one match here; an empty day is impossible
    // while pairings remain.
    let lone = day[0];
    for day_idx in (0..matchdays.len()).rev() {
        if matchdays[day_idx].len() < MATCHES_PER_MATCHDAY {
            continue;
        }
        for slot in 0..matchdays[day_idx].len() {
            let donor = matchdays[day_idx][slot];
            if donor.shares_team(&lone) {
                continue;
            }
            let partner = matchdays[day_idx][1 - slot];
            let Some(pos) = remaining.iter().position(|p| !p.shares_team(&partner)) else {
                continue;
            };
            let backfill = remaining.remove(pos);
            scheduled[backfill.home] += 1;
            scheduled[backfill.away] += 1;
            matchdays[day_idx][slot] = backfill;
            day.push(donor);
            return true;
        }
    }
    false
}
