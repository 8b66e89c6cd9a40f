//! Rank table: inverted preference lists for O(1) comparisons.
//!
//! ## Layout
//!
//! A flat `N * N` vector in row-major order, where the row is the ranked
//! participant (the candidate) and the column is the participant doing the
//! ranking (the owner):
//!
//! ```text
//! ranks[candidate * N + owner] = position of candidate in owner's list
//! ```
//!
//! Built from the receivers' preferences this gives `rank(proposer, receiver)`,
//! the receiver's opinion of a proposer. Built from the proposers'
//! preferences it gives `rank(receiver, proposer)`.

use crate::types::PreferenceTable;

/// Precomputed preference positions, 0-based on every axis.
///
/// ## Example
///
/// ```
/// use stable_marriage::rank::RankTable;
/// use stable_marriage::types::{PreferenceTable, Side};
///
/// // Receiver 1 prefers proposer 2, receiver 2 prefers proposer 1
/// let rows = vec![vec![2, 1], vec![1, 2]];
/// let ranks = RankTable::build(&PreferenceTable::new(Side::Receiver, &rows));
///
/// assert_eq!(ranks.rank(1, 0), 0); // proposer 2 is receiver 1's favourite
/// assert!(ranks.prefers(0, 1, 0)); // receiver 1 prefers proposer 2 over 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    size: usize,
    ranks: Vec<u32>,
}

impl RankTable {
    /// Invert a validated preference table.
    ///
    /// Entries must already be checked to be permutations of `[1, N]` (see
    /// [`PreferenceTable::validate`]); otherwise the result is meaningless
    /// and an out-of-range entry panics on indexing.
    pub fn build(prefs: &PreferenceTable<'_>) -> Self {
        let size = prefs.len();
        let mut ranks = vec![0u32; size * size];

        for (owner, row) in prefs.rows().enumerate() {
            for (position, &candidate) in row.iter().enumerate() {
                ranks[(candidate - 1) * size + owner] = position as u32;
            }
        }

        Self { size, ranks }
    }

    /// Market size N
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the table covers an empty market
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Position of `candidate` in `owner`'s list (lower = more preferred)
    #[inline]
    pub fn rank(&self, candidate: usize, owner: usize) -> u32 {
        self.ranks[candidate * self.size + owner]
    }

    /// True if `owner` strictly prefers candidate `a` over candidate `b`
    #[inline]
    pub fn prefers(&self, owner: usize, a: usize, b: usize) -> bool {
        self.rank(a, owner) < self.rank(b, owner)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn test_build_inverts_preferences() {
        let rows = vec![vec![3, 1, 2], vec![1, 2, 3], vec![2, 3, 1]];
        let ranks = RankTable::build(&PreferenceTable::new(Side::Receiver, &rows));

        assert_eq!(ranks.size(), 3);

        // Receiver 1 ranks proposer 3 first, proposer 2 last
        assert_eq!(ranks.rank(2, 0), 0);
        assert_eq!(ranks.rank(0, 0), 1);
        assert_eq!(ranks.rank(1, 0), 2);

        // Receiver 3 ranks proposer 1 last
        assert_eq!(ranks.rank(0, 2), 2);
    }

    #[test]
    fn test_rank_lookup_matches_linear_scan() {
        let rows = vec![
            vec![10, 3, 8, 5, 4, 9, 1, 7, 2, 6],
            vec![10, 6, 9, 7, 3, 4, 1, 5, 8, 2],
            vec![8, 4, 3, 10, 6, 1, 2, 5, 7, 9],
            vec![3, 10, 6, 2, 1, 5, 9, 4, 7, 8],
            vec![7, 2, 8, 9, 3, 1, 4, 10, 6, 5],
            vec![5, 4, 2, 6, 7, 8, 3, 9, 10, 1],
            vec![6, 1, 4, 2, 10, 9, 3, 7, 5, 8],
            vec![8, 7, 3, 5, 1, 10, 6, 4, 9, 2],
            vec![10, 8, 7, 6, 2, 1, 3, 4, 5, 9],
            vec![10, 7, 1, 3, 4, 8, 6, 9, 2, 5],
        ];
        let ranks = RankTable::build(&PreferenceTable::new(Side::Receiver, &rows));

        for (owner, row) in rows.iter().enumerate() {
            for candidate in 0..rows.len() {
                let scanned = row.iter().position(|&p| p == candidate + 1).unwrap();
                assert_eq!(ranks.rank(candidate, owner) as usize, scanned);
            }
        }
    }

    #[test]
    fn test_prefers_is_strict() {
        let rows = vec![vec![1, 2], vec![2, 1]];
        let ranks = RankTable::build(&PreferenceTable::new(Side::Receiver, &rows));

        assert!(ranks.prefers(0, 0, 1));
        assert!(!ranks.prefers(0, 1, 0));
        assert!(ranks.prefers(1, 1, 0));
        assert!(!ranks.prefers(1, 1, 1));
    }

    #[test]
    fn test_empty_table() {
        let rows: Vec<Vec<usize>> = Vec::new();
        let ranks = RankTable::build(&PreferenceTable::new(Side::Receiver, &rows));

        assert!(ranks.is_empty());
        assert_eq!(ranks.size(), 0);
    }
}
