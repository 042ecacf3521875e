//! This module exposes the strategy seam behind which decision policies
//! are interchangeable.
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::moves::BettingMove;
use crate::selector::choose_move;
use crate::style::PlayingStyle;
use crate::view::TableView;
use crate::ChipCount;

/// A betting-decision policy.
///
/// A strategy is consulted once per betting turn with the player's current
/// stack and bet and a fresh snapshot of the table. It must return exactly
/// one move. Strategies may keep internal state (an owned random source, a
/// learned value table), but the game state itself is never theirs to
/// mutate.
pub trait Strategy {
    /// Choose the next betting move.
    fn choose(&mut self, chips: ChipCount, bet: ChipCount, table: &TableView) -> BettingMove;
}

/// The scripted policy: a [`PlayingStyle`] plus an owned random source.
///
/// Each call takes one uniform draw and resolves it against the style's
/// probability table via [`choose_move`].
#[derive(Debug, Clone)]
pub struct Scripted {
    style: PlayingStyle,
    rng: SmallRng,
}

impl Scripted {
    /// Create a scripted policy seeded from the operating system.
    pub fn new(style: PlayingStyle) -> Self {
        Self {
            style,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Create a scripted policy with a fixed seed, for reproducible play.
    pub fn seeded(style: PlayingStyle, seed: u64) -> Self {
        Self {
            style,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The style governing this policy.
    pub fn style(&self) -> PlayingStyle {
        self.style
    }
}

impl Strategy for Scripted {
    fn choose(&mut self, chips: ChipCount, bet: ChipCount, table: &TableView) -> BettingMove {
        choose_move(self.style, chips, bet, table, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_scripted_is_reproducible() {
        let t = TableView::new(50, 1, 0);
        let mut a = Scripted::seeded(PlayingStyle::Random, 3);
        let mut b = Scripted::seeded(PlayingStyle::Random, 3);
        for _ in 0..50 {
            assert_eq!(a.choose(1000, 0, &t), b.choose(1000, 0, &t));
        }
    }

    #[test]
    fn test_strategies_are_object_safe() {
        let mut boxed: Box<dyn Strategy> = Box::new(Scripted::seeded(PlayingStyle::Safe, 1));
        let t = TableView::new(50, 4, 20);
        let mv = boxed.choose(1000, 0, &t);
        assert!(mv == BettingMove::Called || mv == BettingMove::Folded);
    }
}
