use super::choice::Choice;

/// Default choice substituted when the player's text is not a valid name.
pub const FALLBACK_CHOICE: Choice = Choice::Rock;

/// Normalized player input.
///
/// Invalid text is a normal handled path, not an error: it maps to
/// [`Fallback`] with the default choice, and the caller surfaces the
/// user-visible notification.
///
/// [`Fallback`]: PlayerInput::Fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlayerInput {
    /// The text named a choice exactly (after trimming and uppercasing).
    Valid(Choice),
    /// The text was invalid; the default choice was substituted.
    Fallback(Choice),
}

impl PlayerInput {
    /// The choice to play, regardless of how it was obtained.
    #[must_use]
    pub fn choice(self) -> Choice {
        match self {
            PlayerInput::Valid(choice) | PlayerInput::Fallback(choice) => choice,
        }
    }
}

/// Maps raw player text to a [`PlayerInput`].
///
/// The text is trimmed and uppercased, then matched exactly against the
/// three choice names. Anything else yields
/// `Fallback(`[`FALLBACK_CHOICE`]`)`.
#[must_use]
pub fn normalize(raw: &str) -> PlayerInput {
    match raw.trim().to_uppercase().parse() {
        Ok(choice) => PlayerInput::Valid(choice),
        Err(_) => PlayerInput::Fallback(FALLBACK_CHOICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(normalize("rock"), PlayerInput::Valid(Choice::Rock));
        assert_eq!(normalize("ROCK"), PlayerInput::Valid(Choice::Rock));
        assert_eq!(normalize("Scissors"), PlayerInput::Valid(Choice::Scissors));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize(" paper "), PlayerInput::Valid(Choice::Paper));
        assert_eq!(normalize("\trock\n"), PlayerInput::Valid(Choice::Rock));
    }

    #[test]
    fn test_invalid_text_falls_back_to_default() {
        assert_eq!(normalize("banana"), PlayerInput::Fallback(Choice::Rock));
        assert_eq!(normalize(""), PlayerInput::Fallback(Choice::Rock));
        assert_eq!(normalize("rock paper"), PlayerInput::Fallback(Choice::Rock));
    }

    #[test]
    fn test_choice_accessor_ignores_provenance() {
        assert_eq!(normalize("paper").choice(), Choice::Paper);
        assert_eq!(normalize("banana").choice(), FALLBACK_CHOICE);
        assert!(normalize("banana").is_fallback());
        assert!(normalize("paper").is_valid());
    }
}
