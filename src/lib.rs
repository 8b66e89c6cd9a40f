//! # Stable Marriage
//!
//! Deterministic Gale-Shapley stable matching for two equally sized sides
//! of a market, proposers and receivers.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Core data structures (PreferenceTable, Matching, SolveReceipt)
//! - **Rank**: Inverted preference lists for O(1) comparisons
//! - **Engine**: Validation, the proposal loop and stability verification
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical input and queue discipline give identical matchings
//! 2. **Validate first**: Malformed input is rejected before any state is built
//! 3. **No process exits**: Internal consistency failures are returned as errors
//! 4. **1-based at the boundary**: Participant ids are `[1, N]`, internal tables are 0-based
//!
//! ## Example
//!
//! ```
//! use stable_marriage::solve;
//!
//! let proposers = vec![vec![2, 1], vec![1, 2]];
//! let receivers = vec![vec![1, 2], vec![2, 1]];
//!
//! // receiver 1 <-> proposer 2, receiver 2 <-> proposer 1
//! let matching = solve(2, &proposers, &receivers).unwrap();
//! assert_eq!(matching.as_slice(), &[2, 1]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Core data types: Side, PreferenceTable, Matching, SolveReceipt
pub mod types;

/// Preference-rank indexer
pub mod rank;

/// Stable-matching engine
pub mod engine;

/// Text instance format
pub mod instance;

/// Known instances with expected matchings
pub mod fixtures;

/// Binary logger setup
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{MatchingError, PreferenceProblem, Result};
pub use types::{Matching, PreferenceTable, Side, SolveReceipt};
pub use rank::RankTable;
pub use engine::{solve, QueueDiscipline, SolveOutcome, SolverConfig, StableMatcher};
pub use instance::{Instance, InstanceError};
