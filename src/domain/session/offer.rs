//! Offer-Next: choosing the next word for a session.
//!
//! Unseen words are drawn without replacement from the shuffled remaining
//! pool. Once it is empty, declined words get a re-offer pass, at most
//! [`MAX_REOFFER_PASSES`] times. When both pools are empty the reading ends.

use rand::Rng;

use crate::domain::content::{Cluster, VariantPool};

use super::aggregate::MAX_REOFFER_PASSES;
use super::lines::{ALL_WORDS_RECEIVED, ASKED_TWICE, OPENING_GUIDANCE, SHORT_GUIDANCE};
use super::{Reply, Session, SessionPhase, TurnContext};

impl Session {
    pub(super) fn offer_next(&mut self, ctx: &mut TurnContext<'_>) -> Reply {
        if let Some(id) = self.remaining.pop() {
            let content = ctx.content;
            let Some(cluster) = content.cluster(id) else {
                tracing::warn!(session_id = %self.id, cluster_id = %id, "Cluster missing from catalog");
                return self.lose_thread();
            };

            self.current_cluster = Some(id);
            self.enter(SessionPhase::AwaitContinue);

            let mut text = if self.first_offer_made {
                format!("Your new word is “{}.”\n\n", cluster.head_term())
            } else {
                cluster.intro_line.clone()
            };
            text.push_str(&self.engagement_question(cluster, ctx));
            if let Some(hint) = self.guidance(!self.first_offer_made) {
                text.push('\n');
                text.push_str(hint);
            }

            tracing::debug!(
                session_id = %self.id,
                cluster_id = %id,
                remaining = self.remaining.len(),
                "Offered word"
            );
            return Reply::prompt(text);
        }

        if !self.rejected.is_empty() {
            if self.reoffer_attempts >= MAX_REOFFER_PASSES {
                self.enter(SessionPhase::Done);
                if self.accepted.is_empty() {
                    return Reply::terminal(ASKED_TWICE);
                }
                return Reply::terminal(self.closing(ctx));
            }

            self.enter(SessionPhase::ReofferPrompt);
            self.reoffer_attempts += 1;
            self.short_guidance_shown = false;
            tracing::debug!(
                session_id = %self.id,
                attempt = self.reoffer_attempts,
                declined = self.rejected.len(),
                "Inviting re-offer of declined words"
            );
            return Reply::prompt(ctx.phrase(VariantPool::Reoffer));
        }

        self.enter(SessionPhase::Done);
        Reply::terminal(format!("{ALL_WORDS_RECEIVED}\n{}", self.closing(ctx)))
    }

    /// The cluster's authored question some of the time, a pool draw otherwise.
    fn engagement_question(&self, cluster: &Cluster, ctx: &mut TurnContext<'_>) -> String {
        match cluster.authored_question() {
            Some(question) if ctx.rng.gen_bool(ctx.rules.authored_question_probability()) => {
                question.to_string()
            }
            _ => ctx.phrase(VariantPool::ContinueQuestion),
        }
    }

    /// At most one hint line per response.
    ///
    /// The opening hint fires once per session on the first offer; the short
    /// hint fires once after each reset.
    pub(super) fn guidance(&mut self, opening: bool) -> Option<&'static str> {
        if opening && !self.opening_guidance_shown {
            self.opening_guidance_shown = true;
            self.short_guidance_shown = false;
            return Some(OPENING_GUIDANCE);
        }
        if self.opening_guidance_shown && !self.short_guidance_shown {
            self.short_guidance_shown = true;
            return Some(SHORT_GUIDANCE);
        }
        None
    }
}
