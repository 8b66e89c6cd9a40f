//! Core data types for the stable-matching solver
//!
//! ## Types
//!
//! - [`Side`]: Proposer or Receiver
//! - [`PreferenceTable`]: Validated view over one side's preference lists
//! - [`Matching`]: Receiver to proposer pairing produced by a solve
//! - [`SolveReceipt`]: SSZ-encodable summary of a solve
//!
//! ## Identifiers
//!
//! Participant ids are 1-based `usize` values in `[1, N]` everywhere in the
//! public API. Internal tables are 0-based.

mod side;
mod preference;
mod matching;
mod receipt;

// Re-export all types at module level
pub use side::Side;
pub use preference::PreferenceTable;
pub use matching::Matching;
pub use receipt::SolveReceipt;
