//! Fixed lines of the reading script.
//!
//! Everything that varies between turns lives in the catalog's phrase pools;
//! these are the beats that are always worded the same way.

use crate::domain::content::VariantPool;

pub const SUMMON_QUESTION: &str =
    "Do you wish to summon the Word Psychic, who through the meanings of words deciphers your fortune?";
pub const YES_NO_HINT: &str = "Choose Yes or No.";
pub const OPENING_GUIDANCE: &str = "Yes opens the door, no keeps it shut.";
pub const SHORT_GUIDANCE: &str = "Choose Yes, No, or End session.";

pub const NOTHING_REVEALED: &str =
    "No words were revealed this time. The veil remains for another day.";
pub const SUMMARY_HEADER: &str = "Here are the words that visited you from the beyond:";
pub const ENCOURAGEMENT: &str =
    "Carry these words carefully; they will open doors when you need them.";
pub const ALL_WORDS_RECEIVED: &str = "You have received all available words for this session.";

pub const ASKED_TWICE: &str =
    "I have asked you twice about the words you set aside. The veil closes for today.";
pub const SESSION_COMPLETE: &str = "Very well. The session is complete. May the meanings serve you.";
pub const SPIRITS_QUIET: &str = "The spirits are quiet. Please refresh to begin anew.";
pub const SESSION_EXPIRED: &str = "Session expired.";

/// Prompt returned when a session starts.
pub fn opening_prompt() -> String {
    format!("{SUMMON_QUESTION}\n{YES_NO_HINT}")
}

/// Phrase used when a pool turns out to be empty.
pub fn fallback(pool: VariantPool) -> &'static str {
    match pool {
        VariantPool::AnotherWord => "Would you like another word?",
        VariantPool::Goodbye => "Maybe another time.",
        VariantPool::ExitBlessing => "Farewell.",
        VariantPool::DeclineConfirm => "Very well. Shall I offer another word?",
        VariantPool::InvalidYesNo => "Please choose Yes or No.",
        VariantPool::InvalidYesNoEnd => "Please choose Yes, No, or End session.",
        VariantPool::ContinueQuestion => "Shall we journey further with this word?",
        VariantPool::Reoffer => "You declined some words earlier. Shall I offer them again?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_prompt_ends_with_yes_no_hint() {
        let prompt = opening_prompt();
        assert!(prompt.starts_with(SUMMON_QUESTION));
        assert!(prompt.ends_with("\nChoose Yes or No."));
    }

    #[test]
    fn every_pool_has_a_fallback() {
        for pool in VariantPool::ALL {
            assert!(!fallback(pool).trim().is_empty(), "{pool}");
        }
    }
}
