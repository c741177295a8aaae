use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Result of comparing the computer's choice against the player's.
///
/// Derived per round, never stored. The display and serde names are the
/// raw enumeration names; the round-end diagnostic log emits them as-is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::IsVariant,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    #[display("DRAW")]
    Draw,
    #[display("PLAYER_WINS")]
    PlayerWins,
    #[display("COMPUTER_WINS")]
    ComputerWins,
}

impl Outcome {
    /// Resolves a round from the two choices.
    ///
    /// Total over all 9 input pairs. Equal choices draw; otherwise the
    /// standard dominance cycle applies (paper beats rock, scissors beat
    /// paper, rock beats scissors).
    #[must_use]
    pub fn resolve(computer: Choice, player: Choice) -> Self {
        if computer == player {
            return Outcome::Draw;
        }
        let player_wins = matches!(
            (computer, player),
            (Choice::Rock, Choice::Paper)
                | (Choice::Paper, Choice::Scissors)
                | (Choice::Scissors, Choice::Rock)
        );
        if player_wins {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        }
    }
}
