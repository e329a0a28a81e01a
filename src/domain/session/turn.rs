//! Per-turn inputs and outputs of the state machine.

use rand::RngCore;
use serde::Serialize;

use crate::domain::content::VariantPool;
use crate::ports::ContentProvider;

use super::lines;

/// Chance that an offer uses the cluster's own question instead of a pool draw.
pub const DEFAULT_AUTHORED_QUESTION_PROBABILITY: f64 = 0.35;

/// Tunable knobs of the offer algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferRules {
    authored_question_probability: f64,
}

impl OfferRules {
    /// Probability is clamped to `0.0..=1.0`; NaN falls back to the default.
    pub fn new(authored_question_probability: f64) -> Self {
        let p = if authored_question_probability.is_nan() {
            DEFAULT_AUTHORED_QUESTION_PROBABILITY
        } else {
            authored_question_probability.clamp(0.0, 1.0)
        };
        Self {
            authored_question_probability: p,
        }
    }

    pub fn authored_question_probability(&self) -> f64 {
        self.authored_question_probability
    }
}

impl Default for OfferRules {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHORED_QUESTION_PROBABILITY)
    }
}

/// Collaborators a single turn needs.
///
/// Randomness is passed in rather than reached for, so tests can drive the
/// machine with a seeded generator.
pub struct TurnContext<'a> {
    pub content: &'a dyn ContentProvider,
    pub rng: &'a mut dyn RngCore,
    pub rules: OfferRules,
}

impl<'a> TurnContext<'a> {
    pub fn new(
        content: &'a dyn ContentProvider,
        rng: &'a mut dyn RngCore,
        rules: OfferRules,
    ) -> Self {
        Self { content, rng, rules }
    }

    /// Draw a phrasing from a pool, falling back to a fixed line.
    pub(super) fn phrase(&mut self, pool: VariantPool) -> String {
        let content = self.content;
        content
            .draw_variant(pool, &mut *self.rng)
            .unwrap_or_else(|| lines::fallback(pool))
            .to_string()
    }
}

/// One complete response block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// The session has reached `Done`; no further turns will change it.
    pub done: bool,
}

impl Reply {
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: true,
        }
    }
}
