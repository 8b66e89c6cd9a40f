//! Gale-Shapley proposal loop.
//!
//! ## Algorithm
//!
//! Every proposer starts unmatched with its cursor at the head of its
//! preference list. One step pops an unmatched proposer, proposes to the
//! receiver under its cursor and advances the cursor unconditionally:
//!
//! - a free receiver accepts
//! - a matched receiver keeps whichever of the two it ranks higher and the
//!   loser goes back on the queue
//!
//! The loop ends when the queue is empty. Cursors only move forward, so
//! there are at most N² proposals.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::engine::validation::validate;
use crate::engine::{QueueDiscipline, SolverConfig};
use crate::error::{MatchingError, Result};
use crate::rank::RankTable;
use crate::types::{Matching, PreferenceTable, SolveReceipt};

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Receiver-ordered matching
    pub matching: Matching,
    /// Work summary and matching root
    pub receipt: SolveReceipt,
}

/// Stable matching solver.
///
/// Holds only configuration; all run state is created per call, so one
/// matcher can be shared freely.
///
/// ## Example
///
/// ```
/// use stable_marriage::engine::StableMatcher;
///
/// let proposers = vec![vec![2, 1], vec![1, 2]];
/// let receivers = vec![vec![1, 2], vec![2, 1]];
///
/// let outcome = StableMatcher::new().solve(2, &proposers, &receivers).unwrap();
/// assert_eq!(outcome.matching.as_slice(), &[2, 1]);
/// assert_eq!(outcome.receipt.proposals, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StableMatcher {
    config: SolverConfig,
}

impl StableMatcher {
    /// Create a matcher with the default (FIFO) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with an explicit configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate the instance, then run the proposal loop to completion.
    ///
    /// # Arguments
    ///
    /// * `n` - Market size (participants per side)
    /// * `proposer_prefs` - N lists of 1-based receiver ids, most preferred first
    /// * `receiver_prefs` - N lists of 1-based proposer ids, most preferred first
    ///
    /// # Errors
    ///
    /// Input errors from validation; nothing is computed in that case.
    pub fn solve(
        &self,
        n: usize,
        proposer_prefs: &[Vec<usize>],
        receiver_prefs: &[Vec<usize>],
    ) -> Result<SolveOutcome> {
        let (proposers, receivers) = validate(n, proposer_prefs, receiver_prefs)?;
        let ranks = RankTable::build(&receivers);
        self.run(&proposers, &ranks)
    }

    /// The proposal loop proper. Assumes validated input.
    pub(crate) fn run(
        &self,
        proposers: &PreferenceTable<'_>,
        ranks: &RankTable,
    ) -> Result<SolveOutcome> {
        let n = proposers.len();
        debug!(
            "Solving market of size {} ({:?} queue)",
            n, self.config.discipline
        );

        let mut queue: VecDeque<usize> = (0..n).collect();
        let mut cursor = vec![0usize; n];
        let mut partner: Vec<Option<usize>> = vec![None; n];

        let mut proposals = 0u64;
        let mut rejections = 0u64;
        let mut displacements = 0u64;

        while let Some(proposer) = self.next_proposer(&mut queue) {
            let position = cursor[proposer];
            let prefs = proposers.row(proposer);
            if position >= prefs.len() {
                return Err(MatchingError::CursorExhausted {
                    proposer: proposer + 1,
                });
            }
            cursor[proposer] += 1;
            proposals += 1;

            let receiver = prefs[position] - 1;
            trace!("Proposer {} proposes to receiver {}", proposer + 1, receiver + 1);

            match partner[receiver] {
                None => partner[receiver] = Some(proposer),
                Some(current) if ranks.prefers(receiver, proposer, current) => {
                    partner[receiver] = Some(proposer);
                    queue.push_back(current);
                    displacements += 1;
                }
                Some(_) => {
                    queue.push_back(proposer);
                    rejections += 1;
                }
            }
        }

        // Every proposer left the queue holding its own receiver, so all N
        // slots are filled
        let partners: Vec<usize> = partner.into_iter().flatten().map(|p| p + 1).collect();
        debug_assert_eq!(partners.len(), n);

        let matching = Matching::from_partners(partners);
        let receipt = SolveReceipt::new(
            n as u64,
            proposals,
            rejections,
            displacements,
            matching.root(),
        );

        debug!(
            "Solved market of size {}: {} proposals, {} rejections, {} displacements",
            n, proposals, rejections, displacements
        );

        Ok(SolveOutcome { matching, receipt })
    }

    #[inline]
    fn next_proposer(&self, queue: &mut VecDeque<usize>) -> Option<usize> {
        match self.config.discipline {
            QueueDiscipline::Fifo => queue.pop_front(),
            QueueDiscipline::Lifo => queue.pop_back(),
        }
    }
}

/// Solve with the default configuration and return only the matching.
///
/// The returned matching is receiver-ordered: element `i` is the 1-based
/// proposer matched to receiver `i + 1`.
///
/// ## Example
///
/// ```
/// use stable_marriage::solve;
///
/// let matching = solve(1, &[vec![1]], &[vec![1]]).unwrap();
/// assert_eq!(matching.as_slice(), &[1]);
/// ```
pub fn solve(
    n: usize,
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<Matching> {
    StableMatcher::new()
        .solve(n, proposer_prefs, receiver_prefs)
        .map(|outcome| outcome.matching)
}

// ============================================================================
// Unit Tests
// ============================================================================
