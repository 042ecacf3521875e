//! This module exposes the computer player.
use crate::moves::BettingMove;
use crate::strategy::Strategy;
use crate::view::TableView;
use crate::ChipCount;

/// A computer player: a name, a chip stack, a current-round bet and the
/// strategy that does its thinking.
///
/// The betting-round orchestrator owns the authoritative game state; this
/// structure only tracks the two numbers its strategy reads and offers the
/// bookkeeping the orchestrator needs between moves. Cloning a computer
/// clones its strategy, learned state and all.
#[derive(Debug, Clone)]
pub struct Computer<S> {
    name: String,
    chips: ChipCount,
    bet: ChipCount,
    strategy: S,
}

impl<S: Strategy> Computer<S> {
    /// Seat a new computer player with the given starting stack.
    pub fn new(name: impl Into<String>, chips: ChipCount, strategy: S) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: 0,
            strategy,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's remaining stack.
    pub fn chips(&self) -> ChipCount {
        self.chips
    }

    /// The player's contribution to the current betting round.
    pub fn bet(&self) -> ChipCount {
        self.bet
    }

    /// Borrow the strategy, e.g. to feed transitions to a learner.
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Ask the strategy for the next move given a fresh table snapshot.
    pub fn choose_next_move(&mut self, table: &TableView) -> BettingMove {
        self.strategy.choose(self.chips, self.bet, table)
    }

    /// Move chips from the stack into the current bet, clamped to the
    /// stack. Returns the amount actually staked.
    pub fn stake(&mut self, amount: ChipCount) -> ChipCount {
        let staked = amount.min(self.chips);
        self.chips -= staked;
        self.bet += staked;
        staked
    }

    /// Add winnings to the stack.
    pub fn collect(&mut self, amount: ChipCount) {
        self.chips += amount;
    }

    /// Clear the current bet at the end of a betting round.
    pub fn clear_bet(&mut self) {
        self.bet = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Scripted;
    use crate::style::PlayingStyle;

    #[test]
    fn test_stake_is_clamped_to_stack() {
        let mut player = Computer::new("hal", 30, Scripted::seeded(PlayingStyle::Safe, 1));
        assert_eq!(player.stake(50), 30);
        assert_eq!(player.chips(), 0);
        assert_eq!(player.bet(), 30);
    }

    #[test]
    fn test_bookkeeping_round_trip() {
        let mut player = Computer::new("hal", 100, Scripted::seeded(PlayingStyle::Safe, 1));
        assert_eq!(player.stake(40), 40);
        player.clear_bet();
        player.collect(90);
        assert_eq!(player.chips(), 150);
        assert_eq!(player.bet(), 0);
        assert_eq!(player.name(), "hal");
    }

    #[test]
    fn test_choose_next_move_uses_own_stack() {
        // broke player facing a standing bet can only shove or fold
        let mut player = Computer::new("hal", 5, Scripted::seeded(PlayingStyle::Risky, 2));
        let table = TableView::new(50, 1, 40);
        for _ in 0..50 {
            let mv = player.choose_next_move(&table);
            assert!(mv == BettingMove::AllIn || mv == BettingMove::Folded);
        }
    }

    #[test]
    fn test_clone_preserves_learned_state() {
        use crate::learner::QLearner;
        let mut player = Computer::new("hal", 100, QLearner::seeded(5));
        player.strategy_mut().set_exploration(0.25);
        let copy = player.clone();
        assert!((copy.strategy.exploration() - 0.25).abs() < f64::EPSILON);
        assert_eq!(copy.chips(), 100);
    }
}
