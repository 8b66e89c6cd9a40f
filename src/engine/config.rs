//! Solver configuration.

/// Order in which unmatched proposers are taken off the queue.
///
/// Both disciplines end in the same proposer-optimal stable matching after
/// the same number of proposals. They differ only in how the contested
/// proposals split between rejections and displacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueueDiscipline {
    /// Oldest unmatched proposer first (canonical)
    #[default]
    Fifo,
    /// Most recently queued proposer first
    Lifo,
}

/// Configuration for [`StableMatcher`](crate::engine::StableMatcher).
///
/// ## Example
///
/// ```
/// use stable_marriage::engine::{QueueDiscipline, SolverConfig};
///
/// let config = SolverConfig::new().with_discipline(QueueDiscipline::Lifo);
/// assert_eq!(config.discipline, QueueDiscipline::Lifo);
/// assert_eq!(SolverConfig::default().discipline, QueueDiscipline::Fifo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    /// Queue discipline for unmatched proposers
    pub discipline: QueueDiscipline,
}

impl SolverConfig {
    /// Default configuration (FIFO)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queue discipline
    pub fn with_discipline(mut self, discipline: QueueDiscipline) -> Self {
        self.discipline = discipline;
        self
    }
}
