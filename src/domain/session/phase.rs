//! Phases of a reading session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a session is in the reading script.
///
/// Phases flow:
/// - `Intro` → `AwaitContinue` ⇄ (`PostReveal` | `DeclineConfirm`)
/// - `PostReveal` / `DeclineConfirm` → `ReofferPrompt` once unseen words run out
/// - any phase → `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Waiting for the user to summon the psychic.
    Intro,

    /// A word has been offered; waiting for yes/no on it.
    AwaitContinue,

    /// A word was declined; asking whether to offer another.
    DeclineConfirm,

    /// A word's script was revealed; asking whether to offer another.
    PostReveal,

    /// Unseen words are exhausted; asking whether to revisit declined ones.
    ReofferPrompt,

    /// The reading is over.
    Done,
}

impl SessionPhase {
    /// Returns a short label for logs and API responses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::AwaitContinue => "await_continue",
            Self::DeclineConfirm => "decline_confirm",
            Self::PostReveal => "post_reveal",
            Self::ReofferPrompt => "reoffer_prompt",
            Self::Done => "done",
        }
    }

    /// Returns true if the end-session escape is mentioned in prompts.
    ///
    /// The opening question is strictly Yes/No.
    pub fn offers_end_session(&self) -> bool {
        !matches!(self, Self::Intro | Self::Done)
    }
}

impl StateMachine for SessionPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            Intro => vec![AwaitContinue, Done],
            AwaitContinue => vec![PostReveal, DeclineConfirm, Done],
            DeclineConfirm => vec![AwaitContinue, ReofferPrompt, Done],
            PostReveal => vec![AwaitContinue, ReofferPrompt, Done],
            ReofferPrompt => vec![AwaitContinue, Done],
            Done => vec![],
        }
    }
}
