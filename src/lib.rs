//! Betting-decision policies for computer poker players.
//!
//! This crate is the decision layer of a command-line poker game. The table,
//! pot and hand-evaluation machinery live elsewhere; they feed each policy a
//! handful of numbers (the player's stack and bet plus a [`TableView`]) and
//! receive a single [`BettingMove`] back.
//!
//! Two kinds of policy are provided behind the [`Strategy`] seam:
//!
//! * [`Scripted`] — fixed probability tables selected by a [`PlayingStyle`],
//!   sampled by [`choose_move`].
//! * [`QLearner`] — a small tabular Q-learning policy which learns a
//!   preference over the same abstract situations the scripted tables
//!   branch on.
//!
//! ### Example:
//! ```rust
//! use coldcall::{choose_move, PlayingStyle, TableView};
//!
//! let table = TableView {
//!     raise_amount: 50,
//!     times_raised: 1,
//!     last_bet: 0,
//! };
//! let mut rng = rand::rng();
//! let mv = choose_move(PlayingStyle::Risky, 1000, 0, &table, &mut rng);
//! println!("{:?}", mv);
//! ```
#![warn(missing_docs)]
#![deny(unsafe_code)]

/// A unit for counting chips.
///
/// This should be considered as "the number of chips of minimal value".
/// This crate abstracts all associated values of chips. The only unit used
/// is this `ChipCount`
pub type ChipCount = u32;

mod learner;
mod moves;
mod player;
mod selector;
mod strategy;
mod style;
mod view;

pub use learner::{QLearner, Transition};
pub use moves::BettingMove;
pub use player::Computer;
pub use selector::{choose_move, RAISE_CAP};
pub use strategy::{Scripted, Strategy};
pub use style::{ParseStyleError, PlayingStyle, StyleProfile};
pub use view::TableView;

pub mod prelude {
    //! Module containing common imports required for basic usage.
    pub use super::{
        choose_move, BettingMove, ChipCount, Computer, PlayingStyle, Scripted, Strategy, TableView,
    };
}
