use serde::Serialize;

use crate::{
    Choice, Outcome, RoundInProgressError, RoundNotStartedError,
    core::{FALLBACK_CHOICE, invalid_choice_message, normalize, result_message},
};

use super::{ChoiceGenerator, SessionStats};

/// Guard state of a session.
///
/// At most one round is open at a time; a trigger arriving while a round
/// is `Running` is rejected and must be treated as a no-op by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Idle,
    Running,
}

/// Everything known about one resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
    /// Invalid input was replaced with the default choice.
    pub fallback_applied: bool,
    /// The user-visible verdict sentence.
    pub message: String,
}

impl RoundRecord {
    /// The invalid-input notification to show before the verdict, if any.
    #[must_use]
    pub fn fallback_notice(&self) -> Option<String> {
        self.fallback_applied
            .then(|| invalid_choice_message(FALLBACK_CHOICE))
    }
}

/// A game session: the guard state machine plus round resolution.
///
/// Owns the computer's [`ChoiceGenerator`] and the running
/// [`SessionStats`]. The guard is an explicit state machine rather than a
/// shared flag, so the no-overlap invariant holds however the caller
/// suspends between [`begin_round`] and [`resolve_round`].
///
/// [`begin_round`]: Self::begin_round
/// [`resolve_round`]: Self::resolve_round
#[derive(Debug, Clone)]
pub struct GameSession {
    generator: ChoiceGenerator,
    stats: SessionStats,
    state: SessionState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(ChoiceGenerator::new())
    }

    /// Creates a session with a deterministic computer.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_generator(ChoiceGenerator::from_seed(seed))
    }

    fn with_generator(generator: ChoiceGenerator) -> Self {
        Self {
            generator,
            stats: SessionStats::new(),
            state: SessionState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Opens a round: `Idle` → `Running`.
    ///
    /// Fails without any state change when a round is already open, so a
    /// re-entrant trigger cannot start a second prompt.
    pub fn begin_round(&mut self) -> Result<(), RoundInProgressError> {
        if self.state.is_running() {
            return Err(RoundInProgressError);
        }
        self.state = SessionState::Running;
        log::info!("round starting");
        Ok(())
    }

    /// Resolves the open round from the player's raw text.
    ///
    /// Normalizes the input, draws the computer's choice, resolves the
    /// outcome, and records it in the stats. The session returns to
    /// `Idle` on every path out of this method, fallback input included.
    pub fn resolve_round(&mut self, raw_input: &str) -> Result<RoundRecord, RoundNotStartedError> {
        if self.state.is_idle() {
            return Err(RoundNotStartedError);
        }

        let input = normalize(raw_input);
        let player = input.choice();
        let computer = self.generator.next_choice();
        let outcome = Outcome::resolve(computer, player);
        let record = RoundRecord {
            player,
            computer,
            outcome,
            fallback_applied: input.is_fallback(),
            message: result_message(outcome, player, computer),
        };

        self.stats.record(outcome, record.fallback_applied);
        self.state = SessionState::Idle;
        log::info!("{outcome}");
        Ok(record)
    }

    /// Closes the open round without resolving it: `Running` → `Idle`.
    ///
    /// Used when the player cancels the prompt. Idempotent; aborting an
    /// idle session does nothing.
    pub fn abort_round(&mut self) {
        if self.state.is_running() {
            log::debug!("round aborted");
        }
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_session() -> GameSession {
        let mut session = GameSession::from_seed(42);
        session.begin_round().unwrap();
        session
    }

    mod guard {
        use super::*;

        #[test]
        fn test_starts_idle() {
            let session = GameSession::from_seed(0);
            assert!(session.state().is_idle());
        }

        #[test]
        fn test_begin_round_while_running_is_rejected() {
            let mut session = running_session();
            let stats_before = *session.stats();

            assert!(session.begin_round().is_err());
            assert!(session.state().is_running());
            assert_eq!(*session.stats(), stats_before);
        }

        #[test]
        fn test_resolve_returns_to_idle_on_valid_input() {
            let mut session = running_session();
            session.resolve_round("rock").unwrap();
            assert!(session.state().is_idle());
        }

        #[test]
        fn test_resolve_returns_to_idle_on_fallback_input() {
            let mut session = running_session();
            let record = session.resolve_round("banana").unwrap();
            assert!(record.fallback_applied);
            assert!(session.state().is_idle());
        }

        #[test]
        fn test_resolve_while_idle_is_rejected() {
            let mut session = GameSession::from_seed(0);
            assert!(session.resolve_round("rock").is_err());
            assert_eq!(session.stats().rounds(), 0);
        }

        #[test]
        fn test_abort_returns_to_idle_without_recording() {
            let mut session = running_session();
            session.abort_round();
            assert!(session.state().is_idle());
            assert_eq!(session.stats().rounds(), 0);

            // A new trigger is accepted after the abort.
            assert!(session.begin_round().is_ok());
        }

        #[test]
        fn test_guard_accepts_new_round_after_resolution() {
            let mut session = running_session();
            session.resolve_round("paper").unwrap();
            assert!(session.begin_round().is_ok());
        }
    }

    mod rounds {
        use super::*;

        #[test]
        fn test_record_matches_core_rules() {
            let mut session = running_session();
            let record = session.resolve_round("paper").unwrap();

            assert_eq!(record.player, Choice::Paper);
            assert_eq!(
                record.outcome,
                Outcome::resolve(record.computer, record.player)
            );
            assert_eq!(
                record.message,
                result_message(record.outcome, record.player, record.computer)
            );
            assert!(record.fallback_notice().is_none());
        }

        #[test]
        fn test_fallback_round_plays_the_default_choice() {
            let mut session = running_session();
            let record = session.resolve_round("lizard").unwrap();

            assert_eq!(record.player, FALLBACK_CHOICE);
            assert!(record.fallback_applied);
            assert_eq!(
                record.fallback_notice().unwrap(),
                "Invalid choice! We chose ROCK for you!"
            );
            assert_eq!(session.stats().fallback_rounds(), 1);
        }

        #[test]
        fn test_stats_accumulate_across_rounds() {
            let mut session = GameSession::from_seed(42);
            for input in ["rock", "paper", "scissors", "banana"] {
                session.begin_round().unwrap();
                session.resolve_round(input).unwrap();
            }

            let stats = session.stats();
            assert_eq!(stats.rounds(), 4);
            assert_eq!(
                stats.player_wins() + stats.computer_wins() + stats.draws(),
                4
            );
            assert_eq!(stats.fallback_rounds(), 1);
        }

        #[test]
        fn test_seeded_sessions_are_reproducible() {
            let play = |seed| {
                let mut session = GameSession::from_seed(seed);
                let mut outcomes = Vec::new();
                for _ in 0..20 {
                    session.begin_round().unwrap();
                    outcomes.push(session.resolve_round("rock").unwrap().outcome);
                }
                outcomes
            };
            assert_eq!(play(7), play(7));
        }
    }
}
