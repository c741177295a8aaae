use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A hand shape in Rock-Paper-Scissors.
///
/// Choices are immutable values with no identity beyond equality. The
/// display, serde, and parse names are the uppercase enumeration names
/// (`ROCK`, `PAPER`, `SCISSORS`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Deserialize, Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Choice {
    #[display("ROCK")]
    Rock,
    #[display("PAPER")]
    Paper,
    #[display("SCISSORS")]
    Scissors,
}

/// Error returned when text does not name a valid [`Choice`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("not a valid choice")]
pub struct ParseChoiceError;

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROCK" => Ok(Choice::Rock),
            "PAPER" => Ok(Choice::Paper),
            "SCISSORS" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError),
        }
    }
}

impl Choice {
    /// Number of choices (3).
    pub const LEN: usize = 3;

    /// All choices in enumeration order.
    pub const ALL: [Choice; Self::LEN] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Maps a uniform value in `[0, 1)` to a choice.
    ///
    /// The partition is `[0, 0.34)` → Rock, `[0.34, 0.67)` → Paper,
    /// `[0.67, 1)` → Scissors. The split is deliberately approximate
    /// (Scissors gets the largest share) and is kept as-is.
    #[must_use]
    pub fn from_unit(value: f64) -> Self {
        if value < 0.34 {
            Choice::Rock
        } else if value < 0.67 {
            Choice::Paper
        } else {
            Choice::Scissors
        }
    }
}
