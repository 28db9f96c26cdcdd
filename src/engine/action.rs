/// One discrete player input, routed the way the prompt describes it:
/// a letter, the whole word, or `hint`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Hint,
    Letter(String),
    Word(String),
}

impl PlayerAction {
    /// Keyword that requests the hint
    pub const HINT_KEYWORD: &'static str = "hint";

    /// Classify raw input
    ///
    /// Input is trimmed and lowercased. At most one character goes down the
    /// letter path (so empty input is rejected there), anything longer is a
    /// whole-word guess.
    ///
    /// # Examples
    /// ```
    /// use word_guess::engine::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::parse(" Hint "), PlayerAction::Hint);
    /// assert_eq!(PlayerAction::parse("A"), PlayerAction::Letter("a".into()));
    /// assert_eq!(PlayerAction::parse("Tiger"), PlayerAction::Word("tiger".into()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let guess = input.trim().to_lowercase();

        if guess == Self::HINT_KEYWORD {
            Self::Hint
        } else if guess.chars().count() <= 1 {
            Self::Letter(guess)
        } else {
            Self::Word(guess)
        }
    }
}
