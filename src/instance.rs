//! Plain-text instance format.
//!
//! ## Format
//!
//! ```text
//! # market size
//! 2
//! # proposer rows
//! 2 1
//! 1 2
//! # receiver rows
//! 1 2
//! 2 1
//! ```
//!
//! Blank lines and anything after `#` are ignored. The first remaining line
//! is N, followed by N proposer rows and N receiver rows of whitespace
//! separated ids. Row contents are not checked here; permutation checks are
//! the solver's job so that errors name the offending participant.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::engine::{SolveOutcome, StableMatcher};
use crate::error::MatchingError;

/// Errors raised while reading an instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The file could not be read
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    /// No market size line was found
    #[error("instance is empty")]
    Empty,

    /// A token is not a non-negative integer
    #[error("line {line}: invalid number {token:?}")]
    InvalidToken { line: usize, token: String },

    /// The market size line is not a single usable number
    #[error("line {line}: expected a single market size")]
    InvalidSize { line: usize },

    /// Fewer rows than 2N follow the market size
    #[error("expected {expected} preference rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    /// Content follows the last receiver row
    #[error("line {line}: unexpected data after the last receiver row")]
    TrailingData { line: usize },
}

/// A parsed matching instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Declared market size
    pub size: usize,
    /// Proposer preference rows
    pub proposer_prefs: Vec<Vec<usize>>,
    /// Receiver preference rows
    pub receiver_prefs: Vec<Vec<usize>>,
}

impl Instance {
    /// Parse the text format described in the module docs
    pub fn parse(text: &str) -> Result<Self, InstanceError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.split('#').next().unwrap_or("").trim()))
            .filter(|(_, line)| !line.is_empty());

        let (size_line, size_text) = lines.next().ok_or(InstanceError::Empty)?;
        let size = match parse_row(size_line, size_text)?.as_slice() {
            [size] => *size,
            _ => return Err(InstanceError::InvalidSize { line: size_line }),
        };

        // The declared size is untrusted, so rows grow with the input
        let expected = size
            .checked_mul(2)
            .ok_or(InstanceError::InvalidSize { line: size_line })?;
        let mut rows = Vec::new();
        for (line, content) in lines {
            if rows.len() == expected {
                return Err(InstanceError::TrailingData { line });
            }
            rows.push(parse_row(line, content)?);
        }

        if rows.len() < expected {
            return Err(InstanceError::MissingRows {
                expected,
                found: rows.len(),
            });
        }

        let receiver_prefs = rows.split_off(size);
        Ok(Self {
            size,
            proposer_prefs: rows,
            receiver_prefs,
        })
    }

    /// Read and parse an instance file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Solve this instance with `matcher`
    pub fn solve(&self, matcher: &StableMatcher) -> Result<SolveOutcome, MatchingError> {
        matcher.solve(self.size, &self.proposer_prefs, &self.receiver_prefs)
    }
}

fn parse_row(line: usize, content: &str) -> Result<Vec<usize>, InstanceError> {
    content
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| InstanceError::InvalidToken {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
