//! Error types for the stable-matching solver.
//!
//! ## Taxonomy
//!
//! - **Input errors** are raised by validation before any matching state is
//!   created: mismatched market sizes and preference lists that are not
//!   permutations of `[1, N]`.
//! - **Consistency errors** (`CursorExhausted`) can only surface if
//!   validation was bypassed. They are reported as values so that a host
//!   process is never torn down by the solver.

use thiserror::Error;

use crate::types::Side;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, MatchingError>;

/// What is wrong with a single preference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreferenceProblem {
    /// The list does not rank every participant of the other side
    #[error("expected {expected} entries, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// An entry falls outside `[1, N]`
    #[error("entry {value} is outside 1..={max}")]
    OutOfRange { value: usize, max: usize },

    /// An entry appears more than once
    #[error("entry {value} appears more than once")]
    Duplicate { value: usize },
}

/// Errors produced while validating or solving a matching instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// The two sides of the market have a different number of participants
    #[error("market is unbalanced: {proposers} proposers but {receivers} receivers")]
    ShapeMismatch { proposers: usize, receivers: usize },

    /// The declared market size disagrees with the preference tables
    #[error("declared market size {declared} but preference tables have {found} rows")]
    MarketSize { declared: usize, found: usize },

    /// A participant's preference list is not a permutation of `[1, N]`
    #[error("{side} {participant} has a malformed preference list: {problem}")]
    MalformedPreferences {
        side: Side,
        /// 1-based participant id
        participant: usize,
        problem: PreferenceProblem,
    },

    /// A matching handed to a verifier does not pair every participant
    #[error("matching covers {found} receivers with {distinct} distinct proposers, expected a bijection on {expected}")]
    ImperfectMatching {
        expected: usize,
        found: usize,
        distinct: usize,
    },

    /// Brute-force enumeration refused an instance that is too large
    #[error("cannot enumerate stable matchings for market size {size} (limit {limit})")]
    TooLargeToEnumerate { size: usize, limit: usize },

    /// A proposer ran out of receivers to propose to
    #[error("internal consistency violation: proposer {proposer} exhausted its preference list")]
    CursorExhausted { proposer: usize },
}

impl MatchingError {
    /// True for errors caused by the caller's input.
    ///
    /// Returns false for consistency violations, which indicate a defect in
    /// the solver (or validation having been skipped) rather than bad input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, MatchingError::CursorExhausted { .. })
    }
}
