//! Solve receipt summarizing one run of the proposal loop.
//!
//! The receipt records how much work a solve performed together with a
//! fingerprint of the matching it produced, so runs can be compared without
//! shipping the matching itself.

use ssz_rs::prelude::*;

/// Summary of a completed solve.
///
/// ## Accounting
///
/// Every proposal ends in exactly one of three ways: the receiver was free,
/// the receiver traded up (a displacement) or the proposer was turned away
/// (a rejection). Each of the N receivers is free exactly once, so a
/// complete run always satisfies
/// `proposals == market_size + rejections + displacements`.
///
/// ## Example
///
/// ```
/// use stable_marriage::types::{Matching, SolveReceipt};
///
/// let matching = Matching::from_partners(vec![2, 1]);
/// let receipt = SolveReceipt::new(2, 3, 1, 0, matching.root());
///
/// assert!(receipt.is_balanced());
/// assert_eq!(receipt.contested_proposals(), 1);
/// assert_eq!(receipt.rejection_rate(), Some(1.0 / 3.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct SolveReceipt {
    /// Number of participants on each side
    pub market_size: u64,

    /// Total proposals made
    pub proposals: u64,

    /// Proposals the receiver turned down
    pub rejections: u64,

    /// Proposals that replaced the receiver's previous partner
    pub displacements: u64,

    /// SHA-256 root of the resulting matching (see [`Matching::root`](crate::types::Matching::root))
    pub matching_root: [u8; 32],
}

impl SolveReceipt {
    /// Create a new solve receipt
    ///
    /// # Arguments
    ///
    /// * `market_size` - Participants per side
    /// * `proposals` - Total proposals made
    /// * `rejections` - Proposals turned down
    /// * `displacements` - Proposals that displaced an existing partner
    /// * `matching_root` - 32-byte root of the matching
    pub fn new(
        market_size: u64,
        proposals: u64,
        rejections: u64,
        displacements: u64,
        matching_root: [u8; 32],
    ) -> Self {
        Self {
            market_size,
            proposals,
            rejections,
            displacements,
            matching_root,
        }
    }

    /// Get the matching root as a hex string
    pub fn matching_root_hex(&self) -> String {
        hex::encode(self.matching_root)
    }

    /// Check if this receipt describes an empty market
    pub fn is_empty(&self) -> bool {
        self.market_size == 0
    }

    /// Check the accounting identity and the N² proposal bound
    pub fn is_balanced(&self) -> bool {
        self.proposals == self.market_size + self.rejections + self.displacements
            && self.proposals <= self.market_size.saturating_mul(self.market_size)
    }

    /// Proposals that did not end with a previously free receiver
    pub fn contested_proposals(&self) -> u64 {
        self.rejections + self.displacements
    }

    /// Fraction of proposals that were rejected.
    ///
    /// Returns None if no proposals were made.
    pub fn rejection_rate(&self) -> Option<f64> {
        if self.proposals == 0 {
            None
        } else {
            Some(self.rejections as f64 / self.proposals as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
