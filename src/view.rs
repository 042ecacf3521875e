use crate::ChipCount;

/// A snapshot of the table state relevant to a betting decision.
///
/// The orchestrator supplies a fresh view on every call; policies hold no
/// memory of prior views. All fields are plain chip amounts or counts and
/// are read-only as far as this crate is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The number of chips required from a player to match the current raise.
    pub raise_amount: ChipCount,
    /// How many times the table has been raised in the current betting round.
    pub times_raised: u32,
    /// The highest single bet currently standing.
    pub last_bet: ChipCount,
}

impl TableView {
    /// Convenience constructor, mostly useful in tests and examples.
    pub fn new(raise_amount: ChipCount, times_raised: u32, last_bet: ChipCount) -> Self {
        Self {
            raise_amount,
            times_raised,
            last_bet,
        }
    }
}
