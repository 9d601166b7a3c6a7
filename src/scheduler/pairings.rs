//! Round-robin pairing enumeration.
//!
//! Produces every unordered pair of team indices exactly once, the raw
//! material the matchday packer arranges into a calendar.

/// An unordered pair of team indices.
///
/// `home` and `away` are provisional; the fixture assembler may swap
/// them when it materializes the second leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    /// Index of the provisional home team.
    pub home: usize,
    /// Index of the provisional away team.
    pub away: usize,
}

impl Pairing {
    /// Returns true if the pairing includes the given team index.
    #[inline]
    pub fn involves(&self, team: usize) -> bool {
        self.home == team || self.away == team
    }

    /// Returns true if the two pairings share a team.
    #[inline]
    pub fn shares_team(&self, other: &Pairing) -> bool {
        other.involves(self.home) || other.involves(self.away)
    }
}

/// Enumerates all C(n, 2) pairings of `team_count` teams.
///
/// Pairs are emitted in index order: (0,1), (0,2), .., (n-2,n-1).
/// Fewer than two teams yield an empty list.
pub fn enumerate_pairings(team_count: usize) -> Vec<Pairing> {
    let mut pairings = Vec::with_capacity(team_count * team_count.saturating_sub(1) / 2);
    for home in 0..team_count {
        for away in (home + 1)..team_count {
            pairings.push(Pairing { home, away });
        }
    }
    pairings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_count() {
        for n in 2..=20 {
            let pairings = enumerate_pairings(n);
            assert_eq!(pairings.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_pairings_unique_and_ordered() {
        let pairings = enumerate_pairings(6);
        for (i, a) in pairings.iter().enumerate() {
            assert!(a.home < a.away);
            for b in &pairings[i + 1..] {
                assert!(!(a.home == b.home && a.away == b.away));
            }
        }
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(enumerate_pairings(0).is_empty());
        assert!(enumerate_pairings(1).is_empty());
        assert_eq!(enumerate_pairings(2), vec![Pairing { home: 0, away: 1 }]);
    }

    #[test]
    fn test_involves_and_shares() {
        let ab = Pairing { home: 0, away: 1 };
        let cd = Pairing { home: 2, away: 3 };
        let ac = Pairing { home: 0, away: 2 };

        assert!(ab.involves(0));
        assert!(ab.involves(1));
        assert!(!ab.involves(2));

        assert!(!ab.shares_team(&cd));
        assert!(ab.shares_team(&ac));
        assert!(cd.shares_team(&ac));
    }
}
