//! The two sides of a two-sided matching market.

use std::fmt;

/// Market side: Proposer or Receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// The side that makes proposals (historically "men")
    #[default]
    Proposer,
    /// The side that accepts or rejects proposals (historically "women")
    Receiver,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Receiver => f.write_str("receiver"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Proposer.to_string(), "proposer");
        assert_eq!(Side::Receiver.to_string(), "receiver");
    }
}
