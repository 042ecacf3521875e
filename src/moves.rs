//! This module contains the betting moves a player can make.
use std::fmt;

/// One discrete action taken during a betting round.
///
/// A policy produces exactly one of these per invocation. The betting-round
/// orchestrator is responsible for translating the move into pot and stack
/// updates; no chip amounts are attached here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BettingMove {
    /// Stay in the hand without adding chips. Only meaningful when the
    /// player's bet already matches the highest standing bet.
    Checked,
    /// Match the highest standing bet.
    Called,
    /// Open the betting in a round with no standing bet.
    Bet,
    /// Increase the standing bet.
    Raised,
    /// Commit the whole remaining stack.
    AllIn,
    /// Give up the hand.
    Folded,
}

impl BettingMove {
    /// Returns `true` for moves which put (or may put) chips into the pot
    /// beyond a call, i.e. `Bet`, `Raised` and `AllIn`.
    pub fn is_aggressive(self) -> bool {
        matches!(self, BettingMove::Bet | BettingMove::Raised | BettingMove::AllIn)
    }
}

impl fmt::Display for BettingMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BettingMove::Checked => "checked",
            BettingMove::Called => "called",
            BettingMove::Bet => "bet",
            BettingMove::Raised => "raised",
            BettingMove::AllIn => "went all-in",
            BettingMove::Folded => "folded",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggressive_moves() {
        assert!(BettingMove::Bet.is_aggressive());
        assert!(BettingMove::Raised.is_aggressive());
        assert!(BettingMove::AllIn.is_aggressive());
        assert!(!BettingMove::Checked.is_aggressive());
        assert!(!BettingMove::Called.is_aggressive());
        assert!(!BettingMove::Folded.is_aggressive());
    }

    #[test]
    fn test_display() {
        assert_eq!(BettingMove::AllIn.to_string(), "went all-in");
        assert_eq!(BettingMove::Checked.to_string(), "checked");
    }
}
