use super::{choice::Choice, outcome::Outcome};

/// Question shown when asking the player for a choice.
pub const PROMPT_TEXT: &str = "ROCK, PAPER or SCISSORS?";

/// Renders the round verdict with both choice names interpolated.
#[must_use]
pub fn result_message(outcome: Outcome, player: Choice, computer: Choice) -> String {
    let verdict = match outcome {
        Outcome::Draw => "you had a draw",
        Outcome::PlayerWins => "you won!",
        Outcome::ComputerWins => "you lost!",
    };
    format!("You picked {player}, computer picked {computer}, therefore {verdict}")
}

/// Notification shown when invalid text was substituted with `default`.
#[must_use]
pub fn invalid_choice_message(default: Choice) -> String {
    format!("Invalid choice! We chose {default} for you!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_message() {
        let message = result_message(Outcome::Draw, Choice::Rock, Choice::Rock);
        assert_eq!(
            message,
            "You picked ROCK, computer picked ROCK, therefore you had a draw"
        );
    }

    #[test]
    fn test_win_message() {
        let message = result_message(Outcome::PlayerWins, Choice::Paper, Choice::Rock);
        assert_eq!(
            message,
            "You picked PAPER, computer picked ROCK, therefore you won!"
        );
    }

    #[test]
    fn test_lose_message() {
        let message = result_message(Outcome::ComputerWins, Choice::Paper, Choice::Scissors);
        assert_eq!(
            message,
            "You picked PAPER, computer picked SCISSORS, therefore you lost!"
        );
    }

    #[test]
    fn test_invalid_notice_names_the_default() {
        assert_eq!(
            invalid_choice_message(Choice::Rock),
            "Invalid choice! We chose ROCK for you!"
        );
    }
}
