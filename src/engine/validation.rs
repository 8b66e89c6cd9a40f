//! Input validation for a matching instance.
//!
//! Runs before any matching state exists. Checks are ordered so the
//! cheapest, market-level problems are reported first:
//!
//! 1. both sides have the same number of participants
//! 2. the declared market size agrees with the tables
//! 3. every proposer list, then every receiver list, is a permutation

use log::warn;

use crate::error::{MatchingError, Result};
use crate::types::{PreferenceTable, Side};

/// Validate an instance and return the two preference tables.
///
/// Pure: the same input always produces the same outcome.
///
/// # Errors
///
/// - `ShapeMismatch` if the tables have different row counts
/// - `MarketSize` if `n` disagrees with the row counts
/// - `MalformedPreferences` for the first list that is not a permutation
pub fn validate<'a>(
    n: usize,
    proposer_prefs: &'a [Vec<usize>],
    receiver_prefs: &'a [Vec<usize>],
) -> Result<(PreferenceTable<'a>, PreferenceTable<'a>)> {
    let proposers = PreferenceTable::new(Side::Proposer, proposer_prefs);
    let receivers = PreferenceTable::new(Side::Receiver, receiver_prefs);

    let result = check(n, &proposers, &receivers);
    if let Err(err) = &result {
        warn!("Rejected matching instance: {}", err);
    }
    result.map(|()| (proposers, receivers))
}

fn check(n: usize, proposers: &PreferenceTable<'_>, receivers: &PreferenceTable<'_>) -> Result<()> {
    if proposers.len() != receivers.len() {
        return Err(MatchingError::ShapeMismatch {
            proposers: proposers.len(),
            receivers: receivers.len(),
        });
    }

    if proposers.len() != n {
        return Err(MatchingError::MarketSize {
            declared: n,
            found: proposers.len(),
        });
    }

    proposers.validate(n)?;
    receivers.validate(n)
}
