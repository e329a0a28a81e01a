//! Turn handling: one intent in, one reply out.
//!
//! | Phase          | yes                     | no                          | other      |
//! |----------------|-------------------------|-----------------------------|------------|
//! | Intro          | Offer-Next              | Done, goodbye               | re-prompt  |
//! | AwaitContinue  | reveal → PostReveal     | decline → DeclineConfirm    | re-prompt  |
//! | DeclineConfirm | Offer-Next              | Done, closing               | re-prompt  |
//! | PostReveal     | Offer-Next              | Done, closing               | re-prompt  |
//! | ReofferPrompt  | recycle declined, offer | Done                        | as no      |
//! | Done           | restart message         | restart message             | restart    |
//!
//! Quit and stop close the session from every phase.

use rand::seq::SliceRandom;

use crate::domain::content::VariantPool;
use crate::domain::foundation::Timestamp;

use super::lines::{ASKED_TWICE, SESSION_COMPLETE, SPIRITS_QUIET};
use super::{Intent, Reply, Session, SessionPhase, TurnContext, MAX_REOFFER_PASSES};

impl Session {
    /// Advance the session by one answer.
    ///
    /// Never fails: every reachable state produces a textual reply.
    pub fn respond(&mut self, intent: &Intent, ctx: &mut TurnContext<'_>) -> Reply {
        self.last_active_at = Timestamp::now();

        if intent.is_exit() {
            self.enter(SessionPhase::Done);
            return Reply::terminal(self.closing(ctx));
        }

        match self.phase {
            SessionPhase::Intro => self.on_intro(intent, ctx),
            SessionPhase::AwaitContinue => self.on_await_continue(intent, ctx),
            SessionPhase::DeclineConfirm | SessionPhase::PostReveal => {
                self.on_another_word(intent, ctx)
            }
            SessionPhase::ReofferPrompt => self.on_reoffer_prompt(intent, ctx),
            SessionPhase::Done => Reply::terminal(SPIRITS_QUIET),
        }
    }

    fn on_intro(&mut self, intent: &Intent, ctx: &mut TurnContext<'_>) -> Reply {
        match intent {
            Intent::Yes => {
                self.first_offer_made = false;
                self.offer_next(ctx)
            }
            Intent::No => {
                self.enter(SessionPhase::Done);
                Reply::terminal(ctx.phrase(VariantPool::Goodbye))
            }
            _ => self.reprompt(ctx),
        }
    }

    fn on_await_continue(&mut self, intent: &Intent, ctx: &mut TurnContext<'_>) -> Reply {
        let content = ctx.content;
        let Some((id, cluster)) = self
            .current_cluster
            .and_then(|id| content.cluster(id).map(|cluster| (id, cluster)))
        else {
            tracing::warn!(session_id = %self.id, "No word awaiting a decision");
            return self.lose_thread();
        };

        match intent {
            Intent::Yes => {
                if !self.accepted.iter().any(|title| title == &cluster.title) {
                    self.accepted.push(cluster.title.clone());
                }
                self.current_cluster = None;
                self.first_offer_made = true;
                self.short_guidance_shown = false;
                self.enter(SessionPhase::PostReveal);

                let mut text = format!(
                    "{}\n\n\n\n{}",
                    cluster.script,
                    ctx.phrase(VariantPool::AnotherWord)
                );
                if let Some(hint) = self.guidance(false) {
                    text.push('\n');
                    text.push_str(hint);
                }
                tracing::debug!(session_id = %self.id, cluster_id = %id, "Word accepted");
                Reply::prompt(text)
            }
            Intent::No => {
                if !self.rejected.contains(&id) {
                    self.rejected.push(id);
                }
                self.current_cluster = None;
                self.first_offer_made = true;
                self.enter(SessionPhase::DeclineConfirm);
                self.short_guidance_shown = false;
                tracing::debug!(session_id = %self.id, cluster_id = %id, "Word declined");
                Reply::prompt(ctx.phrase(VariantPool::DeclineConfirm))
            }
            _ => self.reprompt(ctx),
        }
    }

    /// DeclineConfirm and PostReveal both ask "another word?".
    fn on_another_word(&mut self, intent: &Intent, ctx: &mut TurnContext<'_>) -> Reply {
        match intent {
            Intent::Yes => self.offer_next(ctx),
            Intent::No => {
                self.enter(SessionPhase::Done);
                Reply::terminal(self.closing(ctx))
            }
            _ => self.reprompt(ctx),
        }
    }

    fn on_reoffer_prompt(&mut self, intent: &Intent, ctx: &mut TurnContext<'_>) -> Reply {
        if *intent == Intent::Yes {
            self.remaining.append(&mut self.rejected);
            self.remaining.shuffle(&mut *ctx.rng);
            self.first_offer_made = true;
            return self.offer_next(ctx);
        }

        self.enter(SessionPhase::Done);
        if !self.accepted.is_empty() {
            return Reply::terminal(self.closing(ctx));
        }
        if self.reoffer_attempts >= MAX_REOFFER_PASSES {
            Reply::terminal(ASKED_TWICE)
        } else {
            Reply::terminal(SESSION_COMPLETE)
        }
    }

    /// Unrecognized answer: state unchanged, phase-appropriate guidance.
    fn reprompt(&self, ctx: &mut TurnContext<'_>) -> Reply {
        let pool = if self.phase.offers_end_session() {
            VariantPool::InvalidYesNoEnd
        } else {
            VariantPool::InvalidYesNo
        };
        Reply::prompt(ctx.phrase(pool))
    }

    /// Inconsistent state is absorbed: close and ask for a restart.
    pub(super) fn lose_thread(&mut self) -> Reply {
        self.current_cluster = None;
        self.enter(SessionPhase::Done);
        Reply::terminal(SPIRITS_QUIET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::lines::{
        ALL_WORDS_RECEIVED, ENCOURAGEMENT, NOTHING_REVEALED, OPENING_GUIDANCE, SHORT_GUIDANCE,
        SUMMARY_HEADER,
    };
    use crate::domain::session::testing::{FixedContent, Harness, TEST_BLESSING};
    use crate::domain::session::OfferRules;

    fn phrase(pool: VariantPool) -> String {
        FixedContent::phrase(pool)
    }

    fn farewell() -> String {
        format!("{TEST_BLESSING}.")
    }

    mod intro {
        use super::*;

        #[test]
        fn yes_offers_first_word_with_opening_guidance() {
            let mut h = Harness::new(3, 1).with_pool_questions();
            let first = h.next_offer().unwrap();

            let reply = h.answer("yes");

            assert!(!reply.done);
            assert_eq!(h.session.phase(), SessionPhase::AwaitContinue);
            assert_eq!(h.session.current_cluster(), Some(first));
            assert_eq!(
                reply.text,
                format!(
                    "Your word is “word{}.”\n\n{}\n{}",
                    first.index(),
                    phrase(VariantPool::ContinueQuestion),
                    OPENING_GUIDANCE
                )
            );
        }

        #[test]
        fn no_says_goodbye_and_ends() {
            let mut h = Harness::new(3, 1);
            let reply = h.answer("n");

            assert!(reply.done);
            assert_eq!(reply.text, phrase(VariantPool::Goodbye));
            assert_eq!(h.session.phase(), SessionPhase::Done);
        }

        #[test]
        fn unknown_answer_asks_for_yes_or_no() {
            let mut h = Harness::new(3, 1);
            let before = h.session.remaining().to_vec();

            let reply = h.answer("tell me more");

            assert!(!reply.done);
            assert_eq!(reply.text, phrase(VariantPool::InvalidYesNo));
            assert_eq!(h.session.phase(), SessionPhase::Intro);
            assert_eq!(h.session.remaining(), before.as_slice());
        }
    }

    mod offers {
        use super::*;

        #[test]
        fn authored_question_used_when_probability_is_one() {
            let mut h = Harness::new(2, 5);
            h.rules = OfferRules::new(1.0);
            let first = h.next_offer().unwrap();

            let reply = h.answer("yes");

            assert!(reply
                .text
                .contains(&format!("Authored question {}?", first.index())));
        }

        #[test]
        fn later_offers_announce_head_term() {
            let mut h = Harness::new(3, 9).with_pool_questions();
            h.answer("yes");
            h.answer("yes");
            let second = h.next_offer().unwrap();

            let reply = h.answer("yes");

            assert!(reply
                .text
                .starts_with(&format!("Your new word is “Word{}.”\n\n", second.index())));
        }

        #[test]
        fn short_guidance_follows_reveal_then_stays_quiet() {
            let mut h = Harness::new(3, 2).with_pool_questions();
            h.answer("yes");

            let reveal = h.answer("yes");
            assert!(reveal.text.ends_with(&format!(
                "\n\n\n\n{}\n{}",
                phrase(VariantPool::AnotherWord),
                SHORT_GUIDANCE
            )));

            let offer = h.answer("yes");
            assert!(!offer.text.contains(SHORT_GUIDANCE));
            assert!(!offer.text.contains(OPENING_GUIDANCE));
        }

        #[test]
        fn short_guidance_returns_after_decline() {
            let mut h = Harness::new(3, 2).with_pool_questions();
            h.answer("yes");
            h.answer("yes");
            h.answer("yes");

            let decline = h.answer("no");
            assert_eq!(decline.text, phrase(VariantPool::DeclineConfirm));

            let offer = h.answer("yes");
            assert!(offer.text.ends_with(&format!("\n{SHORT_GUIDANCE}")));
        }
    }

    mod await_continue {
        use super::*;

        #[test]
        fn yes_reveals_script_and_records_title() {
            let mut h = Harness::new(3, 4);
            let first = h.next_offer().unwrap();
            h.answer("yes");

            let reply = h.answer("Y");

            assert!(reply.text.starts_with(&format!("Script {}.", first.index())));
            assert_eq!(h.session.phase(), SessionPhase::PostReveal);
            assert_eq!(h.session.accepted(), [h.content.title(first).to_string()]);
            assert_eq!(h.session.current_cluster(), None);
        }

        #[test]
        fn no_moves_word_to_rejected() {
            let mut h = Harness::new(3, 4);
            let first = h.next_offer().unwrap();
            h.answer("yes");

            h.answer("no");

            assert_eq!(h.session.phase(), SessionPhase::DeclineConfirm);
            assert_eq!(h.session.rejected(), [first]);
            assert!(!h.session.remaining().contains(&first));
        }

        #[test]
        fn unknown_answer_mentions_end_session() {
            let mut h = Harness::new(3, 4);
            h.answer("yes");

            let reply = h.answer("perhaps");

            assert_eq!(reply.text, phrase(VariantPool::InvalidYesNoEnd));
            assert_eq!(h.session.phase(), SessionPhase::AwaitContinue);
        }

        #[test]
        fn missing_current_word_closes_with_restart_message() {
            let mut h = Harness::new(3, 4);
            h.answer("yes");
            h.session.current_cluster = None;

            let reply = h.answer("yes");

            assert_eq!(reply, Reply::terminal(SPIRITS_QUIET));
            assert_eq!(h.session.phase(), SessionPhase::Done);
        }
    }

    mod exhaustion {
        use super::*;

        #[test]
        fn declining_everything_leads_to_reoffer_prompt() {
            let mut h = Harness::new(3, 21);
            h.answer("yes");
            let mut offered = vec![h.session.current_cluster().unwrap()];

            for _ in 0..2 {
                h.answer("no");
                h.answer("yes");
                let id = h.session.current_cluster().unwrap();
                assert!(!offered.contains(&id), "word {id} offered twice");
                offered.push(id);
            }
            h.answer("no");
            assert_eq!(h.session.rejected().len(), 3);

            let reply = h.answer("yes");

            assert_eq!(h.session.phase(), SessionPhase::ReofferPrompt);
            assert_eq!(h.session.reoffer_attempts(), 1);
            assert_eq!(reply.text, phrase(VariantPool::Reoffer));
        }

        #[test]
        fn accepting_everything_ends_with_all_titles_in_order() {
            let mut h = Harness::new(3, 8);
            let order: Vec<String> = h
                .session
                .remaining()
                .iter()
                .rev()
                .map(|id| h.content.title(*id).to_string())
                .collect();

            h.answer("yes");
            for _ in 0..3 {
                h.answer("yes");
                h.answer("yes");
            }

            assert_eq!(h.session.phase(), SessionPhase::Done);
            assert_eq!(h.session.accepted(), order.as_slice());
        }

        #[test]
        fn final_offer_reports_all_words_received() {
            let mut h = Harness::new(2, 8);
            h.answer("yes");
            h.answer("yes");
            h.answer("yes");
            h.answer("yes");

            let reply = h.answer("yes");

            assert!(reply.done);
            let titles = h.session.accepted().join("\n\n");
            assert_eq!(
                reply.text,
                format!(
                    "{ALL_WORDS_RECEIVED}\n{SUMMARY_HEADER}\n\n{titles}\n\n{ENCOURAGEMENT}\n{}",
                    farewell()
                )
            );
        }
    }

    mod reoffer {
        use super::*;

        /// One word, declined, at the re-offer prompt.
        fn at_reoffer_prompt() -> Harness {
            let mut h = Harness::new(1, 3);
            h.answer("yes");
            h.answer("no");
            h.answer("yes");
            assert_eq!(h.session.phase(), SessionPhase::ReofferPrompt);
            h
        }

        #[test]
        fn yes_recycles_declined_words() {
            let mut h = at_reoffer_prompt();

            h.answer("yes");

            assert_eq!(h.session.phase(), SessionPhase::AwaitContinue);
            assert!(h.session.rejected().is_empty());
            assert_eq!(h.session.current_cluster().map(|c| c.index()), Some(0));
        }

        #[test]
        fn recycled_offer_uses_head_term() {
            let mut h = at_reoffer_prompt().with_pool_questions();

            let reply = h.answer("yes");

            assert!(reply.text.starts_with("Your new word is “Word0.”"));
        }

        #[test]
        fn no_without_accepted_words_completes_session() {
            let mut h = at_reoffer_prompt();

            let reply = h.answer("no");

            assert_eq!(reply, Reply::terminal(SESSION_COMPLETE));
        }

        #[test]
        fn anything_but_yes_counts_as_no() {
            let mut h = at_reoffer_prompt();

            let reply = h.answer("what?");

            assert!(reply.done);
            assert_eq!(h.session.phase(), SessionPhase::Done);
        }

        #[test]
        fn no_with_accepted_words_returns_closing_summary() {
            let mut h = Harness::new(2, 6);
            let kept = h.next_offer().unwrap();
            h.answer("yes");
            h.answer("yes");
            h.answer("yes");
            h.answer("no");
            h.answer("yes");
            assert_eq!(h.session.phase(), SessionPhase::ReofferPrompt);

            let reply = h.answer("no");

            assert_eq!(
                reply.text,
                format!(
                    "{SUMMARY_HEADER}\n\n{}\n\n{ENCOURAGEMENT}\n{}",
                    h.content.title(kept),
                    farewell()
                )
            );
        }

        #[test]
        fn third_exhaustion_closes_after_two_passes() {
            let mut h = at_reoffer_prompt();
            h.answer("yes");
            h.answer("no");
            h.answer("yes");
            assert_eq!(h.session.reoffer_attempts(), 2);
            h.answer("yes");
            h.answer("no");

            let reply = h.answer("yes");

            assert_eq!(reply, Reply::terminal(ASKED_TWICE));
            assert_eq!(h.session.reoffer_attempts(), 2);
        }

        #[test]
        fn second_prompt_refused_reports_asked_twice() {
            let mut h = at_reoffer_prompt();
            h.answer("yes");
            h.answer("no");
            h.answer("yes");

            let reply = h.answer("no");

            assert_eq!(reply, Reply::terminal(ASKED_TWICE));
        }
    }

    mod exits {
        use super::*;

        fn drive_to(phase: SessionPhase) -> Harness {
            let mut h = Harness::new(1, 12);
            let path: &[&str] = match phase {
                SessionPhase::Intro => &[],
                SessionPhase::AwaitContinue => &["yes"],
                SessionPhase::DeclineConfirm => &["yes", "no"],
                SessionPhase::PostReveal => &["yes", "yes"],
                SessionPhase::ReofferPrompt => &["yes", "no", "yes"],
                SessionPhase::Done => &["no"],
            };
            for answer in path {
                h.answer(answer);
            }
            assert_eq!(h.session.phase(), phase);
            h
        }

        #[test]
        fn quit_and_stop_close_from_every_live_phase() {
            for phase in [
                SessionPhase::Intro,
                SessionPhase::AwaitContinue,
                SessionPhase::DeclineConfirm,
                SessionPhase::PostReveal,
                SessionPhase::ReofferPrompt,
            ] {
                for exit in ["quit", "q", "stop", "enough", "end"] {
                    let mut h = drive_to(phase);
                    let reply = h.answer(exit);

                    assert!(reply.done, "{phase:?} {exit}");
                    assert_eq!(h.session.phase(), SessionPhase::Done);
                    assert!(
                        reply.text.starts_with(NOTHING_REVEALED)
                            || reply.text.starts_with(SUMMARY_HEADER),
                        "{phase:?} {exit}: {}",
                        reply.text
                    );
                    assert!(reply.text.ends_with(&format!("\n{}", farewell())));
                }
            }
        }

        #[test]
        fn quit_after_reveal_lists_the_word() {
            let mut h = drive_to(SessionPhase::PostReveal);

            let reply = h.answer("quit");

            assert_eq!(
                reply.text,
                format!(
                    "{SUMMARY_HEADER}\n\nWord0 → Second0 → Third0\n\n{ENCOURAGEMENT}\n{}",
                    farewell()
                )
            );
        }

        #[test]
        fn done_session_only_answers_with_restart_message() {
            let mut h = drive_to(SessionPhase::Done);
            let frozen = h.session.clone();

            for answer in ["yes", "no", "hello"] {
                assert_eq!(h.answer(answer), Reply::terminal(SPIRITS_QUIET));
            }
            assert_eq!(h.session.remaining(), frozen.remaining());
            assert_eq!(h.session.phase(), SessionPhase::Done);
        }

        #[test]
        fn quit_on_done_session_still_returns_closing() {
            let mut h = drive_to(SessionPhase::Done);

            let reply = h.answer("stop");

            assert_eq!(reply.text, format!("{NOTHING_REVEALED}\n{}", farewell()));
        }
    }
}
