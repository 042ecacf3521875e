//! The scripted move selector.
//!
//! This is a pure function of the player's stack and bet, a playing style
//! and a [`TableView`], plus one uniform draw from a caller-supplied random
//! source. It mutates no state and owns no data beyond its inputs.
use rand::Rng;

use crate::moves::BettingMove;
use crate::style::{PlayingStyle, StyleProfile};
use crate::view::TableView;
use crate::ChipCount;

/// The number of raises per betting round after which no further bets or
/// raises are entertained; the selector then only calls or folds.
pub const RAISE_CAP: u32 = 4;

/// How a player stands relative to the table, derived from the
/// affordability and raise-cap gates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Standing {
    /// Cannot even match the standing bet.
    CannotCall,
    /// Can call, but a full raise is out of reach.
    ShortStacked,
    /// Free to bet or raise.
    Open,
    /// The round has been raised to the cap.
    Capped,
}

pub(crate) const NUM_STANDINGS: usize = 4;

impl Standing {
    pub(crate) fn index(self) -> usize {
        match self {
            Standing::CannotCall => 0,
            Standing::ShortStacked => 1,
            Standing::Open => 2,
            Standing::Capped => 3,
        }
    }
}

/// Classify the player's standing.
///
/// Affordability comparisons use the absolute difference between bet and
/// table amounts. This tolerates a bet exceeding the table amount and
/// treats it symmetrically, which is a modeling simplification the whole
/// decision table is calibrated against.
pub(crate) fn standing(chips: ChipCount, bet: ChipCount, table: &TableView) -> Standing {
    if chips <= gap(bet, table.raise_amount) {
        if chips <= gap(bet, table.last_bet) {
            Standing::CannotCall
        } else {
            Standing::ShortStacked
        }
    } else if table.times_raised < RAISE_CAP {
        Standing::Open
    } else {
        Standing::Capped
    }
}

fn gap(a: ChipCount, b: ChipCount) -> ChipCount {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Resolve a draw `x` from `[0, 1)` against the branch-specific cumulative
/// table of the given profile.
fn pick(
    profile: &StyleProfile,
    chips: ChipCount,
    bet: ChipCount,
    table: &TableView,
    x: f64,
) -> BettingMove {
    let matched = bet == table.last_bet;
    match standing(chips, bet, table) {
        Standing::CannotCall => {
            if x <= profile.forced_all_in {
                BettingMove::AllIn
            } else {
                BettingMove::Folded
            }
        }
        Standing::ShortStacked => {
            if x <= profile.short_call {
                if matched {
                    BettingMove::Checked
                } else {
                    BettingMove::Called
                }
            } else if x <= profile.short_all_in {
                BettingMove::AllIn
            } else {
                BettingMove::Folded
            }
        }
        Standing::Open => {
            if x <= profile.open_call {
                if matched {
                    BettingMove::Checked
                } else {
                    BettingMove::Called
                }
            } else if x <= profile.open_raise {
                if matched {
                    BettingMove::Bet
                } else {
                    BettingMove::Raised
                }
            } else {
                BettingMove::Folded
            }
        }
        Standing::Capped => {
            if x <= profile.capped_call {
                BettingMove::Called
            } else {
                BettingMove::Folded
            }
        }
    }
}

/// Choose the next betting move for a scripted computer player.
///
/// `chips` and `bet` describe the player; `table` is a fresh snapshot of
/// the current betting round. One uniform draw is taken from `rng` and
/// resolved against the probability table of `style`.
///
/// Exactly one move is returned and the function never panics. Inputs are
/// not validated; out-of-range values flow through the affordability
/// comparisons as-is and callers are responsible for their sanity.
pub fn choose_move<R: Rng>(
    style: PlayingStyle,
    chips: ChipCount,
    bet: ChipCount,
    table: &TableView,
    rng: &mut R,
) -> BettingMove {
    let x = rng.random::<f64>();
    let chosen = pick(style.profile(), chips, bet, table, x);
    log::trace!(
        "{} selector: chips={} bet={} {:?} x={:.3} -> {}",
        style,
        chips,
        bet,
        table,
        x,
        chosen
    );
    chosen
}
