//! Preference tables for one side of the market.
//!
//! ## Indexing
//!
//! Rows are indexed 0-based by participant (row `i` belongs to participant
//! `i + 1`), while the entries of a row are 1-based ids of participants on
//! the opposite side. `validate` is the gate that makes it safe for the rank
//! indexer and the engine to subtract 1 from every entry.

use crate::error::{MatchingError, PreferenceProblem, Result};
use crate::types::Side;

/// A borrowed view over the preference lists of one side.
///
/// ## Example
///
/// ```
/// use stable_marriage::types::{PreferenceTable, Side};
///
/// let rows = vec![vec![2, 1], vec![1, 2]];
/// let table = PreferenceTable::new(Side::Proposer, &rows);
///
/// assert!(table.validate(2).is_ok());
/// assert_eq!(table.row(0), &[2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PreferenceTable<'a> {
    side: Side,
    rows: &'a [Vec<usize>],
}

impl<'a> PreferenceTable<'a> {
    /// Wrap the preference rows of `side`
    pub fn new(side: Side, rows: &'a [Vec<usize>]) -> Self {
        Self { side, rows }
    }

    /// Which side of the market these preferences belong to
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of participants (rows)
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no participants
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Preference list of the participant at 0-based index `idx`
    #[inline]
    pub fn row(&self, idx: usize) -> &'a [usize] {
        let rows = self.rows;
        &rows[idx]
    }

    /// Iterate over all rows in participant order
    pub fn rows(&self) -> impl Iterator<Item = &'a [usize]> + 'a {
        let rows = self.rows;
        rows.iter().map(Vec::as_slice)
    }

    /// Check that every row is a permutation of `[1, n]`.
    ///
    /// Rows are checked in ascending participant order and the first
    /// offending row is reported. The row count itself is not checked here;
    /// that is a market-level concern handled by the engine.
    ///
    /// # Errors
    ///
    /// `MatchingError::MalformedPreferences` naming the side, the 1-based
    /// participant id and the first problem found in its list.
    pub fn validate(&self, n: usize) -> Result<()> {
        let mut seen = vec![false; n];

        for (idx, row) in self.rows().enumerate() {
            if let Err(problem) = check_permutation(row, n, &mut seen) {
                return Err(MatchingError::MalformedPreferences {
                    side: self.side,
                    participant: idx + 1,
                    problem,
                });
            }
        }

        Ok(())
    }
}

/// Check a single list against `[1, n]`, reusing `seen` as scratch space.
fn check_permutation(
    row: &[usize],
    n: usize,
    seen: &mut [bool],
) -> std::result::Result<(), PreferenceProblem> {
    if row.len() != n {
        return Err(PreferenceProblem::WrongLength {
            expected: n,
            found: row.len(),
        });
    }

    seen.fill(false);
    for &value in row {
        if value == 0 || value > n {
            return Err(PreferenceProblem::OutOfRange { value, max: n });
        }
        if std::mem::replace(&mut seen[value - 1], true) {
            return Err(PreferenceProblem::Duplicate { value });
        }
    }

    // n distinct values in [1, n]: nothing can be missing
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(result: Result<()>) -> (Side, usize, PreferenceProblem) {
        match result {
            Err(MatchingError::MalformedPreferences {
                side,
                participant,
                problem,
            }) => (side, participant, problem),
            other => panic!("expected malformed preferences, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_permutations() {
        let rows = vec![vec![3, 1, 2], vec![1, 2, 3], vec![2, 3, 1]];
        let table = PreferenceTable::new(Side::Receiver, &rows);

        assert!(table.validate(3).is_ok());
        assert_eq!(table.len(), 3);
        assert_eq!(table.side(), Side::Receiver);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let rows: Vec<Vec<usize>> = Vec::new();
        let table = PreferenceTable::new(Side::Proposer, &rows);

        assert!(table.is_empty());
        assert!(table.validate(0).is_ok());
    }

    #[test]
    fn test_duplicate_entry() {
        let rows = vec![vec![1, 2, 3], vec![1, 1, 2], vec![3, 2, 1]];
        let table = PreferenceTable::new(Side::Proposer, &rows);

        let (side, participant, problem) = malformed(table.validate(3));
        assert_eq!(side, Side::Proposer);
        assert_eq!(participant, 2);
        assert_eq!(problem, PreferenceProblem::Duplicate { value: 1 });
    }

    #[test]
    fn test_out_of_range_entries() {
        let zero = vec![vec![0, 1]];
        let (_, _, problem) = malformed(PreferenceTable::new(Side::Receiver, &zero).validate(2));
        assert_eq!(problem, PreferenceProblem::OutOfRange { value: 0, max: 2 });

        let high = vec![vec![1, 3]];
        let (_, _, problem) = malformed(PreferenceTable::new(Side::Receiver, &high).validate(2));
        assert_eq!(problem, PreferenceProblem::OutOfRange { value: 3, max: 2 });
    }

    #[test]
    fn test_wrong_length() {
        let rows = vec![vec![1, 2], vec![2]];
        let table = PreferenceTable::new(Side::Receiver, &rows);

        let (side, participant, problem) = malformed(table.validate(2));
        assert_eq!(side, Side::Receiver);
        assert_eq!(participant, 2);
        assert_eq!(problem, PreferenceProblem::WrongLength { expected: 2, found: 1 });
    }

    #[test]
    fn test_first_offending_row_is_reported() {
        let rows = vec![vec![1, 2], vec![2, 2], vec![5, 1]];
        let table = PreferenceTable::new(Side::Proposer, &rows);

        let (_, participant, _) = malformed(table.validate(2));
        assert_eq!(participant, 2);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let rows = vec![vec![1, 1, 2]];
        let table = PreferenceTable::new(Side::Proposer, &rows);

        assert_eq!(table.validate(3), table.validate(3));
    }
}
