//! Normalization of raw answers into a closed intent set.

/// What the user meant by an answer.
///
/// Anything outside the recognized vocabulary is kept as `Other` with the
/// normalized text; it is a valid, handled intent that re-prompts the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Yes,
    No,
    Quit,
    Stop,
    Other(String),
}

impl Intent {
    /// Trim, lower-case and classify a raw answer.
    pub fn normalize(raw: &str) -> Self {
        let answer = raw.trim().to_lowercase();
        match answer.as_str() {
            "y" | "yes" => Self::Yes,
            "n" | "no" => Self::No,
            "q" | "quit" => Self::Quit,
            "s" | "stop" | "enough" | "end" => Self::Stop,
            _ => Self::Other(answer),
        }
    }

    /// Quit and stop end the session from any phase.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Quit | Self::Stop)
    }
}
