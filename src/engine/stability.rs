//! Stability verification.
//!
//! ## Blocking Pairs
//!
//! A proposer `p` and receiver `r` that are not matched to each other block
//! a matching when `p` prefers `r` over its own partner and `r` prefers `p`
//! over its own partner. A matching with no blocking pair is stable.
//!
//! ## Enumeration
//!
//! [`enumerate_stable_matchings`] tries every bijection and keeps the stable
//! ones. That is N! candidates, so it refuses markets larger than
//! [`MAX_ENUMERATION_SIZE`]. It exists to check optimality claims on small
//! instances, not for production use.

use crate::engine::validation::validate;
use crate::error::{MatchingError, Result};
use crate::rank::RankTable;
use crate::types::Matching;

/// Largest market [`enumerate_stable_matchings`] will accept (8! = 40320)
pub const MAX_ENUMERATION_SIZE: usize = 8;

/// A proposer and receiver who would both rather be with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockingPair {
    /// 1-based proposer id
    pub proposer: usize,
    /// 1-based receiver id
    pub receiver: usize,
}

/// Both sides' rank tables for one instance.
struct Ranks {
    proposers: RankTable,
    receivers: RankTable,
}

impl Ranks {
    fn first_blocking_pair(&self, partners: &[usize], by_proposer: &[usize]) -> Option<BlockingPair> {
        let n = partners.len();
        for proposer in 0..n {
            let mine = by_proposer[proposer];
            for receiver in 0..n {
                if receiver == mine {
                    continue;
                }
                if self.proposers.prefers(proposer, receiver, mine)
                    && self.receivers.prefers(receiver, proposer, partners[receiver])
                {
                    return Some(BlockingPair {
                        proposer: proposer + 1,
                        receiver: receiver + 1,
                    });
                }
            }
        }
        None
    }

    fn size(&self) -> usize {
        self.proposers.size()
    }

    fn stable_matchings(&self) -> Result<Vec<Matching>> {
        let n = self.size();
        if n > MAX_ENUMERATION_SIZE {
            return Err(MatchingError::TooLargeToEnumerate {
                size: n,
                limit: MAX_ENUMERATION_SIZE,
            });
        }

        let mut found = Vec::new();
        let mut partners = vec![0usize; n];
        let mut by_proposer = vec![0usize; n];
        let mut used = vec![false; n];
        extend(self, 0, &mut partners, &mut by_proposer, &mut used, &mut found);
        Ok(found)
    }
}

/// Validate the instance and build both rank tables.
fn prepare(n: usize, proposer_prefs: &[Vec<usize>], receiver_prefs: &[Vec<usize>]) -> Result<Ranks> {
    let (proposers, receivers) = validate(n, proposer_prefs, receiver_prefs)?;
    Ok(Ranks {
        proposers: RankTable::build(&proposers),
        receivers: RankTable::build(&receivers),
    })
}

/// Convert a 1-based matching into 0-based receiver and proposer views.
fn zero_based(matching: &Matching) -> Result<(Vec<usize>, Vec<usize>)> {
    let by_proposer = matching
        .by_proposer()
        .ok_or_else(|| MatchingError::ImperfectMatching {
            expected: matching.len(),
            found: matching.len(),
            distinct: matching.distinct_proposers(),
        })?;

    let partners = matching.as_slice().iter().map(|&p| p - 1).collect();
    let by_proposer = by_proposer.into_iter().map(|r| r - 1).collect();
    Ok((partners, by_proposer))
}

/// Find the first blocking pair of `matching`, scanning proposers then
/// receivers in ascending id order.
///
/// # Errors
///
/// Validation errors for the preference tables, and `ImperfectMatching` if
/// `matching` is not a bijection on `[1, N]`.
///
/// ## Example
///
/// ```
/// use stable_marriage::engine::stability::{find_blocking_pair, BlockingPair};
/// use stable_marriage::types::Matching;
///
/// let proposers = vec![vec![2, 1], vec![1, 2]];
/// let receivers = vec![vec![1, 2], vec![2, 1]];
///
/// let stable = Matching::from_partners(vec![2, 1]);
/// assert_eq!(find_blocking_pair(&stable, &proposers, &receivers).unwrap(), None);
/// ```
pub fn find_blocking_pair(
    matching: &Matching,
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<Option<BlockingPair>> {
    let ranks = prepare(matching.len(), proposer_prefs, receiver_prefs)?;
    let (partners, by_proposer) = zero_based(matching)?;
    Ok(ranks.first_blocking_pair(&partners, &by_proposer))
}

/// True if `matching` has no blocking pair
pub fn is_stable(
    matching: &Matching,
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<bool> {
    find_blocking_pair(matching, proposer_prefs, receiver_prefs).map(|pair| pair.is_none())
}

/// Every stable matching of the instance, in lexicographic order of the
/// receiver-ordered partner vector.
///
/// # Errors
///
/// Validation errors, or `TooLargeToEnumerate` when `n` exceeds
/// [`MAX_ENUMERATION_SIZE`].
pub fn enumerate_stable_matchings(
    n: usize,
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<Vec<Matching>> {
    let ranks = prepare(n, proposer_prefs, receiver_prefs)?;
    ranks.stable_matchings()
}

/// Assign a proposer to `receiver` and recurse; collect complete stable
/// assignments.
fn extend(
    ranks: &Ranks,
    receiver: usize,
    partners: &mut [usize],
    by_proposer: &mut [usize],
    used: &mut [bool],
    found: &mut Vec<Matching>,
) {
    let n = partners.len();
    if receiver == n {
        if ranks.first_blocking_pair(partners, by_proposer).is_none() {
            found.push(Matching::from_partners(partners.iter().map(|&p| p + 1).collect()));
        }
        return;
    }

    for proposer in 0..n {
        if used[proposer] {
            continue;
        }
        used[proposer] = true;
        partners[receiver] = proposer;
        by_proposer[proposer] = receiver;
        extend(ranks, receiver + 1, partners, by_proposer, used, found);
        used[proposer] = false;
    }
}

/// True if no stable matching gives any proposer a strictly better partner
/// than `matching` does.
///
/// Gale-Shapley with proposers proposing always returns such a matching;
/// by the lattice structure of stable matchings it is simultaneously the
/// worst stable matching for every receiver.
///
/// # Errors
///
/// As for [`enumerate_stable_matchings`] and [`find_blocking_pair`].
pub fn is_proposer_optimal(
    matching: &Matching,
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<bool> {
    let n = matching.len();
    let ranks = prepare(n, proposer_prefs, receiver_prefs)?;
    let (_, ours) = zero_based(matching)?;

    for other in ranks.stable_matchings()? {
        let (_, theirs) = zero_based(&other)?;
        let better = (0..n).any(|p| ranks.proposers.prefers(p, theirs[p], ours[p]));
        if better {
            return Ok(false);
        }
    }

    Ok(true)
}

/// True if no stable matching gives any receiver a strictly worse partner
/// than `matching` does.
///
/// # Errors
///
/// As for [`enumerate_stable_matchings`] and [`find_blocking_pair`].
pub fn is_receiver_pessimal(
    matching: &Matching,
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<bool> {
    let n = matching.len();
    let ranks = prepare(n, proposer_prefs, receiver_prefs)?;
    let (ours, _) = zero_based(matching)?;

    for other in ranks.stable_matchings()? {
        let (theirs, _) = zero_based(&other)?;
        let worse = (0..n).any(|r| ranks.receivers.prefers(r, ours[r], theirs[r]));
        if worse {
            return Ok(false);
        }
    }

    Ok(true)
}

// ============================================================================
// Unit Tests
// ============================================================================
