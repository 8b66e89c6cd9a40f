//! Stable-matching engine.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same input and queue discipline always produce the same matching
//! 2. **Fail fast**: Input is fully validated before any matching state exists
//! 3. **Synchronous Execution**: Single-threaded, no shared state between solves
//! 4. **O(N²)**: Rank lookups are O(1) after an O(N²) preprocessing pass
//!
//! ## Matching Rules
//!
//! - Proposers propose in order of their own preferences, never twice to the same receiver
//! - A free receiver accepts any proposal
//! - A matched receiver trades up only for a strictly preferred proposer
//! - The result is the proposer-optimal, receiver-pessimal stable matching
//!
//! ## Example
//!
//! ```
//! use stable_marriage::engine::{QueueDiscipline, SolverConfig, StableMatcher};
//! use stable_marriage::engine::stability::is_stable;
//!
//! let proposers = vec![vec![1, 2], vec![1, 2]];
//! let receivers = vec![vec![2, 1], vec![1, 2]];
//!
//! let matcher = StableMatcher::with_config(SolverConfig::new().with_discipline(QueueDiscipline::Fifo));
//! let outcome = matcher.solve(2, &proposers, &receivers).unwrap();
//!
//! assert_eq!(outcome.matching.as_slice(), &[2, 1]);
//! assert!(is_stable(&outcome.matching, &proposers, &receivers).unwrap());
//! ```

pub mod config;
pub mod solver;
pub mod stability;
pub mod validation;

pub use config::{QueueDiscipline, SolverConfig};
pub use solver::{solve, SolveOutcome, StableMatcher};
pub use stability::BlockingPair;
pub use validation::validate;
