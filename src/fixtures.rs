//! Regression fixtures with known proposer-optimal matchings.
//!
//! Shared by the `demo` command, the integration tests and the benchmarks.

/// A solved instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Short human-readable name
    pub name: &'static str,
    /// Proposer preference lists (1-based receiver ids)
    pub proposer_prefs: Vec<Vec<usize>>,
    /// Receiver preference lists (1-based proposer ids)
    pub receiver_prefs: Vec<Vec<usize>>,
    /// Receiver-ordered expected matching
    pub expected: Vec<usize>,
}

impl Fixture {
    /// Market size
    pub fn size(&self) -> usize {
        self.proposer_prefs.len()
    }
}

/// The fixed regression set, smallest first.
pub fn regression_fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "single",
            proposer_prefs: vec![vec![1]],
            receiver_prefs: vec![vec![1]],
            expected: vec![1],
        },
        Fixture {
            name: "crossed-2",
            proposer_prefs: vec![vec![2, 1], vec![1, 2]],
            receiver_prefs: vec![vec![1, 2], vec![2, 1]],
            expected: vec![2, 1],
        },
        Fixture {
            name: "market-10a",
            proposer_prefs: vec![
                vec![8, 3, 7, 1, 4, 2, 5, 10, 6, 9],
                vec![7, 4, 8, 3, 9, 6, 2, 1, 5, 10],
                vec![8, 6, 10, 4, 7, 1, 3, 9, 5, 2],
                vec![2, 1, 8, 6, 3, 9, 5, 4, 7, 10],
                vec![2, 3, 7, 5, 4, 6, 9, 10, 1, 8],
                vec![9, 8, 7, 10, 5, 6, 1, 2, 3, 4],
                vec![10, 4, 6, 9, 7, 1, 8, 3, 5, 2],
                vec![8, 1, 4, 3, 10, 7, 9, 5, 2, 6],
                vec![2, 4, 5, 10, 9, 3, 6, 1, 8, 7],
                vec![6, 8, 1, 9, 4, 5, 10, 3, 7, 2],
            ],
            receiver_prefs: vec![
                vec![10, 3, 8, 5, 4, 9, 1, 7, 2, 6],
                vec![10, 6, 9, 7, 3, 4, 1, 5, 8, 2],
                vec![8, 4, 3, 10, 6, 1, 2, 5, 7, 9],
                vec![3, 10, 6, 2, 1, 5, 9, 4, 7, 8],
                vec![7, 2, 8, 9, 3, 1, 4, 10, 6, 5],
                vec![5, 4, 2, 6, 7, 8, 3, 9, 10, 1],
                vec![6, 1, 4, 2, 10, 9, 3, 7, 5, 8],
                vec![8, 7, 3, 5, 1, 10, 6, 4, 9, 2],
                vec![10, 8, 7, 6, 2, 1, 3, 4, 5, 9],
                vec![10, 7, 1, 3, 4, 8, 6, 9, 2, 5],
            ],
            expected: vec![10, 9, 1, 3, 5, 4, 2, 8, 6, 7],
        },
        Fixture {
            name: "market-10b",
            proposer_prefs: vec![
                vec![10, 2, 1, 4, 6, 5, 7, 8, 9, 3],
                vec![8, 3, 7, 1, 4, 9, 2, 5, 6, 10],
                vec![7, 9, 3, 10, 1, 6, 5, 8, 2, 4],
                vec![5, 8, 7, 10, 4, 2, 3, 9, 1, 6],
                vec![3, 5, 10, 4, 6, 2, 7, 9, 1, 8],
                vec![3, 7, 8, 1, 10, 9, 6, 4, 5, 2],
                vec![6, 3, 10, 5, 2, 4, 9, 1, 8, 7],
                vec![8, 10, 7, 6, 3, 9, 1, 2, 5, 4],
                vec![4, 10, 7, 3, 5, 1, 2, 6, 9, 8],
                vec![9, 8, 1, 10, 4, 7, 6, 3, 2, 5],
            ],
            receiver_prefs: vec![
                vec![10, 2, 7, 9, 3, 5, 6, 4, 1, 8],
                vec![4, 2, 9, 1, 3, 5, 6, 10, 7, 8],
                vec![3, 5, 6, 10, 1, 2, 7, 4, 8, 9],
                vec![5, 1, 9, 3, 2, 10, 4, 7, 8, 6],
                vec![6, 9, 4, 10, 8, 5, 1, 2, 3, 7],
                vec![6, 5, 8, 10, 1, 7, 3, 4, 2, 9],
                vec![6, 4, 2, 1, 5, 7, 10, 3, 9, 8],
                vec![1, 6, 8, 3, 5, 10, 2, 7, 9, 4],
                vec![1, 3, 2, 8, 10, 5, 6, 7, 4, 9],
                vec![2, 4, 8, 6, 3, 7, 5, 9, 10, 1],
            ],
            expected: vec![10, 2, 5, 9, 4, 7, 6, 8, 3, 1],
        },
    ]
}
