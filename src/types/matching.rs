//! The result of a solve: who each receiver ends up with.

use sha2::{Digest, Sha256};

/// A one-to-one pairing of receivers with proposers.
///
/// Stored as a vector indexed by receiver (0-based position `i` holds
/// receiver `i + 1`'s partner) whose values are 1-based proposer ids.
///
/// ## Example
///
/// ```
/// use stable_marriage::types::Matching;
///
/// let matching = Matching::from_partners(vec![2, 1]);
///
/// assert_eq!(matching.proposer_of(1), Some(2));
/// assert_eq!(matching.by_proposer(), Some(vec![2, 1]));
/// assert!(matching.is_perfect());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Matching {
    partners: Vec<usize>,
}

impl Matching {
    /// Build a matching from receiver-ordered 1-based proposer ids
    pub fn from_partners(partners: Vec<usize>) -> Self {
        Self { partners }
    }

    /// Number of receivers covered
    #[inline]
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Check if the matching is empty (N = 0)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Receiver-ordered proposer ids
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.partners
    }

    /// Consume the matching, returning the receiver-ordered proposer ids
    pub fn into_vec(self) -> Vec<usize> {
        self.partners
    }

    /// Proposer matched to `receiver` (both 1-based)
    pub fn proposer_of(&self, receiver: usize) -> Option<usize> {
        receiver
            .checked_sub(1)
            .and_then(|idx| self.partners.get(idx))
            .copied()
    }

    /// Iterate over `(receiver, proposer)` pairs, 1-based, in receiver order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .map(|(idx, &proposer)| (idx + 1, proposer))
    }

    /// Proposer-ordered view: position `i` holds proposer `i + 1`'s receiver.
    ///
    /// Returns `None` unless the matching is perfect.
    pub fn by_proposer(&self) -> Option<Vec<usize>> {
        let n = self.partners.len();
        let mut inverse = vec![0usize; n];

        for (receiver, proposer) in self.pairs() {
            if proposer == 0 || proposer > n || inverse[proposer - 1] != 0 {
                return None;
            }
            inverse[proposer - 1] = receiver;
        }

        Some(inverse)
    }

    /// Check that the matching is a bijection on `[1, N]`
    pub fn is_perfect(&self) -> bool {
        self.by_proposer().is_some()
    }

    /// Number of distinct in-range proposers appearing in the matching
    pub fn distinct_proposers(&self) -> usize {
        let n = self.partners.len();
        let mut seen = vec![false; n];
        self.partners
            .iter()
            .filter(|&&p| p >= 1 && p <= n && !std::mem::replace(&mut seen[p - 1], true))
            .count()
    }

    /// SHA-256 over the proposer ids as little-endian u64, in receiver order.
    ///
    /// Identical matchings always produce identical roots.
    pub fn root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for &proposer in &self.partners {
            hasher.update((proposer as u64).to_le_bytes());
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&hasher.finalize());
        hash
    }
}

impl From<Matching> for Vec<usize> {
    fn from(matching: Matching) -> Self {
        matching.into_vec()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
