//! A tabular Q-learning decision policy.
//!
//! This is the learning-based alternative to the scripted tables, sitting
//! behind the same [`Strategy`] seam. It abstracts each betting turn into
//! one of eight situations (the selector's own affordability and raise-cap
//! gates, crossed with whether the player's bet matches the standing bet)
//! and learns a preference over four abstract actions per situation.
//!
//! Learning happens off the decision path: the orchestrator records
//! [`Transition`]s via [`QLearner::remember`] and triggers minibatch
//! updates via [`QLearner::replay`]. Exploration follows an epsilon-greedy
//! schedule which decays with every replay pass.
use std::collections::VecDeque;

use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::moves::BettingMove;
use crate::selector::{standing, Standing, NUM_STANDINGS};
use crate::strategy::Strategy;
use crate::view::TableView;
use crate::ChipCount;

const NUM_STATES: usize = NUM_STANDINGS * 2;
const NUM_ACTIONS: usize = 4;

/// Discount applied to future rewards.
const GAMMA: f64 = 0.95;
/// Per-update step size of the Q table.
const ALPHA: f64 = 0.05;
/// Exploration rate floor.
const EPSILON_MIN: f64 = 0.01;
/// Multiplicative exploration decay, applied once per replay pass.
const EPSILON_DECAY: f64 = 0.995;
/// Oldest transitions are evicted beyond this many.
const MEMORY_LIMIT: usize = 2000;
/// Transitions sampled per replay pass.
const MINIBATCH: usize = 32;

// Abstract action indices. Concrete moves depend on the standing, see
// `concrete_move`.
const STAY: usize = 0;
const PUSH: usize = 1;
const SHOVE: usize = 2;
const FOLD: usize = 3;

/// One observed betting turn, recorded by the orchestrator for learning.
///
/// The `chips`/`bet`/`table` triple describes the situation the move was
/// chosen in, and the `next_*` fields the situation the round advanced to.
/// For a terminal transition (the hand ended) set `terminal` and leave the
/// `next_*` fields at whatever the final state was; they are ignored.
#[derive(Debug, Copy, Clone)]
pub struct Transition {
    /// The player's stack when the move was chosen.
    pub chips: ChipCount,
    /// The player's current-round bet when the move was chosen.
    pub bet: ChipCount,
    /// The table snapshot the move was chosen against.
    pub table: TableView,
    /// The move that was taken.
    pub chosen: BettingMove,
    /// The reward observed for this transition. Usually zero until the
    /// hand resolves, then the chips won (or lost, negated).
    pub reward: f64,
    /// The player's stack after the round advanced.
    pub next_chips: ChipCount,
    /// The player's bet after the round advanced.
    pub next_bet: ChipCount,
    /// The table snapshot after the round advanced.
    pub next_table: TableView,
    /// Whether the hand ended with this transition.
    pub terminal: bool,
}

/// A betting policy that learns from played hands.
///
/// See the module documentation for the state and action abstraction.
#[derive(Debug, Clone)]
pub struct QLearner {
    q: [[f64; NUM_ACTIONS]; NUM_STATES],
    memory: VecDeque<(usize, usize, f64, usize, bool)>,
    epsilon: f64,
    rng: SmallRng,
}

fn state_index(chips: ChipCount, bet: ChipCount, table: &TableView) -> usize {
    let matched = bet == table.last_bet;
    standing(chips, bet, table).index() * 2 + matched as usize
}

fn action_index(mv: BettingMove) -> usize {
    match mv {
        BettingMove::Checked | BettingMove::Called => STAY,
        BettingMove::Bet | BettingMove::Raised => PUSH,
        BettingMove::AllIn => SHOVE,
        BettingMove::Folded => FOLD,
    }
}

/// Translate an abstract action into the move that is legal for the given
/// situation.
fn concrete_move(action: usize, s: Standing, matched: bool) -> BettingMove {
    match (action, s) {
        (FOLD, _) => BettingMove::Folded,
        (_, Standing::CannotCall) => BettingMove::AllIn,
        (SHOVE, Standing::ShortStacked) | (SHOVE, Standing::Open) => BettingMove::AllIn,
        (PUSH, Standing::ShortStacked) => BettingMove::AllIn,
        (PUSH, Standing::Open) => {
            if matched {
                BettingMove::Bet
            } else {
                BettingMove::Raised
            }
        }
        (_, Standing::Capped) => BettingMove::Called,
        (_, _) => {
            if matched {
                BettingMove::Checked
            } else {
                BettingMove::Called
            }
        }
    }
}

impl QLearner {
    /// Create a learner seeded from the operating system, starting fully
    /// exploratory.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Create a learner with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            q: [[0.0; NUM_ACTIONS]; NUM_STATES],
            memory: VecDeque::with_capacity(MEMORY_LIMIT),
            epsilon: 1.0,
            rng,
        }
    }

    /// The current exploration rate.
    pub fn exploration(&self) -> f64 {
        self.epsilon
    }

    /// Override the exploration rate, clamped to `[0, 1]`.
    ///
    /// Setting it to zero freezes the policy for evaluation play.
    pub fn set_exploration(&mut self, epsilon: f64) {
        self.epsilon = epsilon.max(0.0).min(1.0);
    }

    /// The number of transitions currently held in replay memory.
    pub fn memory_len(&self) -> usize {
        self.memory.len()
    }

    /// Record one observed transition, evicting the oldest once the
    /// memory limit is reached.
    pub fn remember(&mut self, t: Transition) {
        let s = state_index(t.chips, t.bet, &t.table);
        let a = action_index(t.chosen);
        let s2 = state_index(t.next_chips, t.next_bet, &t.next_table);
        if self.memory.len() == MEMORY_LIMIT {
            self.memory.pop_front();
        }
        self.memory.push_back((s, a, t.reward, s2, t.terminal));
    }

    /// Run one minibatch of Q-updates over remembered transitions and
    /// decay the exploration rate.
    ///
    /// A no-op while the memory is empty. With fewer transitions than the
    /// minibatch size, whatever is available is used.
    pub fn replay(&mut self) {
        if self.memory.is_empty() {
            return;
        }
        let k = MINIBATCH.min(self.memory.len());
        let picks = rand::seq::index::sample(&mut self.rng, self.memory.len(), k);
        for i in picks.iter() {
            let (s, a, reward, s2, terminal) = self.memory[i];
            let target = if terminal {
                reward
            } else {
                reward + GAMMA * row_max(&self.q[s2])
            };
            self.q[s][a] += ALPHA * (target - self.q[s][a]);
        }
        self.epsilon = (self.epsilon * EPSILON_DECAY).max(EPSILON_MIN);
        log::trace!(
            "q-learner replay: batch={} epsilon={:.3} memory={}",
            k,
            self.epsilon,
            self.memory.len()
        );
    }

    fn greedy_action(&self, state: usize) -> usize {
        self.q[state]
            .iter()
            .position_max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or(STAY)
    }
}

impl Default for QLearner {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for QLearner {
    fn choose(&mut self, chips: ChipCount, bet: ChipCount, table: &TableView) -> BettingMove {
        let s = standing(chips, bet, table);
        let matched = bet == table.last_bet;
        let state = s.index() * 2 + matched as usize;
        let action = if self.rng.random::<f64>() <= self.epsilon {
            self.rng.random_range(0..NUM_ACTIONS)
        } else {
            self.greedy_action(state)
        };
        let chosen = concrete_move(action, s, matched);
        log::trace!(
            "q-learner: state={} action={} epsilon={:.3} -> {}",
            state,
            action,
            self.epsilon,
            chosen
        );
        chosen
    }
}

fn row_max(row: &[f64; NUM_ACTIONS]) -> f64 {
    row.iter().cloned().fold(f64::MIN, f64::max)
}
