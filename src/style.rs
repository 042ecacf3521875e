//! This module contains the playing styles of scripted computer players
//! and the probability tables which drive them.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A tag selecting which probability table governs a computer player's
/// decisions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayingStyle {
    /// Plays conservatively. Checks and calls a lot, rarely raises.
    Safe,
    /// Plays aggressively. Bets and raises more often than it should.
    Risky,
    /// Close to uniform over the available moves.
    Random,
}

/// The cumulative thresholds governing one playing style.
///
/// All values are upper bounds on a single uniform draw `x` from `[0, 1)`.
/// Which threshold applies depends on the branch the selector ends up in,
/// see [`choose_move`](crate::choose_move).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleProfile {
    /// All-in bound when the player cannot even afford a call.
    pub forced_all_in: f64,
    /// Check/call bound when the player can call but not raise.
    pub short_call: f64,
    /// All-in bound when the player can call but not raise. Everything
    /// above it folds.
    pub short_all_in: f64,
    /// Check/call bound in an open round (raise cap not yet reached).
    pub open_call: f64,
    /// Bet/raise bound in an open round. Everything above it folds.
    pub open_raise: f64,
    /// Call bound once the round has been raised to the cap.
    pub capped_call: f64,
}

const RISKY: StyleProfile = StyleProfile {
    forced_all_in: 0.90,
    short_call: 0.40,
    short_all_in: 0.90,
    open_call: 0.40,
    open_raise: 0.90,
    capped_call: 0.90,
};

const SAFE: StyleProfile = StyleProfile {
    forced_all_in: 0.60,
    short_call: 0.60,
    short_all_in: 0.80,
    open_call: 0.70,
    open_raise: 0.90,
    capped_call: 0.90,
};

const RANDOM: StyleProfile = StyleProfile {
    forced_all_in: 0.50,
    short_call: 0.30,
    short_all_in: 0.66,
    open_call: 0.33,
    open_raise: 0.66,
    capped_call: 0.66,
};

impl PlayingStyle {
    /// Look up the probability table for this style.
    pub fn profile(self) -> &'static StyleProfile {
        match self {
            PlayingStyle::Safe => &SAFE,
            PlayingStyle::Risky => &RISKY,
            PlayingStyle::Random => &RANDOM,
        }
    }

    /// All styles, in no particular order.
    pub const ALL: [PlayingStyle; 3] =
        [PlayingStyle::Safe, PlayingStyle::Risky, PlayingStyle::Random];
}

impl fmt::Display for PlayingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayingStyle::Safe => "safe",
            PlayingStyle::Risky => "risky",
            PlayingStyle::Random => "random",
        };
        f.write_str(s)
    }
}

/// Error returned when a playing style cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown playing style `{0}`, expected one of safe, risky, random")]
pub struct ParseStyleError(String);

impl FromStr for PlayingStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "safe" => Ok(PlayingStyle::Safe),
            "risky" => Ok(PlayingStyle::Risky),
            "random" => Ok(PlayingStyle::Random),
            _ => Err(ParseStyleError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_profiles_are_valid_cumulative_bounds() {
        for style in PlayingStyle::ALL.iter() {
            let p = style.profile();
            for &bound in [
                p.forced_all_in,
                p.short_call,
                p.short_all_in,
                p.open_call,
                p.open_raise,
                p.capped_call,
            ]
            .iter()
            {
                assert!(bound > 0.0 && bound <= 1.0, "{}: {}", style, bound);
            }
            // within one branch the thresholds must be ordered
            assert!([p.short_call, p.short_all_in]
                .iter()
                .tuple_windows()
                .all(|(a, b)| a <= b));
            assert!([p.open_call, p.open_raise]
                .iter()
                .tuple_windows()
                .all(|(a, b)| a <= b));
        }
    }

    #[test]
    fn test_risky_dominates_safe() {
        let risky = PlayingStyle::Risky.profile();
        let safe = PlayingStyle::Safe.profile();
        // the aggressive windows of the safe style are contained in the
        // risky ones
        assert!(risky.forced_all_in >= safe.forced_all_in);
        assert!(risky.short_call <= safe.short_call);
        assert!(risky.short_all_in >= safe.short_all_in);
        assert!(risky.open_call <= safe.open_call);
        assert!(risky.open_raise >= safe.open_raise);
    }

    #[test]
    fn test_parse() {
        assert_eq!("safe".parse::<PlayingStyle>(), Ok(PlayingStyle::Safe));
        assert_eq!("RISKY".parse::<PlayingStyle>(), Ok(PlayingStyle::Risky));
        assert_eq!("Random".parse::<PlayingStyle>(), Ok(PlayingStyle::Random));
        assert!("deep-q".parse::<PlayingStyle>().is_err());
    }

    #[test]
    fn test_roundtrip_display_parse() {
        for style in PlayingStyle::ALL.iter() {
            assert_eq!(style.to_string().parse::<PlayingStyle>(), Ok(*style));
        }
    }
}
