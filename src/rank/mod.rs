//! Preference-rank indexer.
//!
//! ## Purpose
//!
//! Comparing two suitors by scanning a receiver's preference list costs O(N)
//! per comparison. Inverting every list once up front costs O(N²) and turns
//! each comparison into a single indexed load, which keeps the whole solve
//! at O(N²).
//!
//! ## Components
//!
//! - [`RankTable`]: flat `N * N` table of preference positions
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build | O(N²) |
//! | Rank lookup | O(1) |
//! | Strict preference test | O(1) |

pub mod table;

pub use table::RankTable;
