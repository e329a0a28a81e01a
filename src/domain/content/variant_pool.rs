//! Named pools of phrase variations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled pool of interchangeable phrasings.
///
/// One phrase is drawn uniformly at random each time the dialogue needs the
/// corresponding beat, so the psychic doesn't repeat itself word for word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantPool {
    /// "Would you like another word?" after a reveal.
    AnotherWord,
    /// Declining the summons at the very start.
    Goodbye,
    /// Farewell line closing every summary.
    ExitBlessing,
    /// Confirming a declined word and offering another.
    DeclineConfirm,
    /// Re-prompt when only Yes/No are accepted.
    InvalidYesNo,
    /// Re-prompt when Yes/No/End session are accepted.
    InvalidYesNoEnd,
    /// Generic "journey further with this word?" questions.
    ContinueQuestion,
    /// Invitation to revisit declined words.
    Reoffer,
}

impl VariantPool {
    /// Every pool, in catalog order.
    pub const ALL: [VariantPool; 8] = [
        VariantPool::AnotherWord,
        VariantPool::Goodbye,
        VariantPool::ExitBlessing,
        VariantPool::DeclineConfirm,
        VariantPool::InvalidYesNo,
        VariantPool::InvalidYesNoEnd,
        VariantPool::ContinueQuestion,
        VariantPool::Reoffer,
    ];

    /// Key used for this pool in catalog files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AnotherWord => "another_word",
            Self::Goodbye => "goodbye",
            Self::ExitBlessing => "exit_blessing",
            Self::DeclineConfirm => "decline_confirm",
            Self::InvalidYesNo => "invalid_yes_no",
            Self::InvalidYesNoEnd => "invalid_yes_no_end",
            Self::ContinueQuestion => "continue_question",
            Self::Reoffer => "reoffer",
        }
    }
}

impl fmt::Display for VariantPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
