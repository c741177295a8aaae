use serde::{Deserialize, Serialize};

use crate::Outcome;

/// Per-process tally of resolved rounds.
///
/// Lives only in memory for the current session; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionStats {
    rounds: usize,
    player_wins: usize,
    computer_wins: usize,
    draws: usize,
    fallback_rounds: usize,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one resolved round.
    ///
    /// `fallback_applied` marks rounds where invalid input was replaced
    /// with the default choice.
    pub fn record(&mut self, outcome: Outcome, fallback_applied: bool) {
        self.rounds += 1;
        match outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::ComputerWins => self.computer_wins += 1,
        }
        if fallback_applied {
            self.fallback_rounds += 1;
        }
    }

    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub fn player_wins(&self) -> usize {
        self.player_wins
    }

    #[must_use]
    pub fn computer_wins(&self) -> usize {
        self.computer_wins
    }

    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    #[must_use]
    pub fn fallback_rounds(&self) -> usize {
        self.fallback_rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_sums_to_rounds() {
        let mut stats = SessionStats::new();
        stats.record(Outcome::PlayerWins, false);
        stats.record(Outcome::PlayerWins, true);
        stats.record(Outcome::ComputerWins, false);
        stats.record(Outcome::Draw, false);

        assert_eq!(stats.rounds(), 4);
        assert_eq!(stats.player_wins(), 2);
        assert_eq!(stats.computer_wins(), 1);
        assert_eq!(stats.draws(), 1);
        assert_eq!(stats.fallback_rounds(), 1);
        assert_eq!(
            stats.player_wins() + stats.computer_wins() + stats.draws(),
            stats.rounds()
        );
    }
}
