//! Property tests: arbitrary answer sequences never break session bookkeeping.

use std::collections::HashSet;

use proptest::prelude::*;

use super::testing::{Harness, TEST_BLESSING};
use super::{Intent, SessionPhase, MAX_REOFFER_PASSES};

fn answer_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        6 => Just("yes"),
        4 => Just("no"),
        1 => Just("maybe"),
        1 => Just("  Y "),
        1 => Just("quit"),
        1 => Just("stop"),
    ]
}

fn assert_bookkeeping(h: &Harness) -> Result<(), TestCaseError> {
    let session = &h.session;

    let remaining: HashSet<_> = session.remaining().iter().copied().collect();
    let rejected: HashSet<_> = session.rejected().iter().copied().collect();
    prop_assert_eq!(remaining.len(), session.remaining().len(), "duplicate in remaining");
    prop_assert_eq!(rejected.len(), session.rejected().len(), "duplicate in rejected");
    prop_assert!(remaining.is_disjoint(&rejected), "word both unseen and declined");

    if let Some(current) = session.current_cluster() {
        prop_assert!(!remaining.contains(&current));
        prop_assert!(!rejected.contains(&current));
    }

    let accepted: HashSet<_> = session.accepted().iter().collect();
    prop_assert_eq!(accepted.len(), session.accepted().len(), "duplicate in accepted");
    prop_assert!(session.reoffer_attempts() <= MAX_REOFFER_PASSES);
    Ok(())
}

proptest! {
    #[test]
    fn bookkeeping_holds_for_any_answers(
        n in 1usize..6,
        seed in any::<u64>(),
        answers in prop::collection::vec(answer_strategy(), 0..40),
    ) {
        let mut h = Harness::new(n, seed);
        let mut offered_first_pass = HashSet::new();
        let mut was_done = false;

        for raw in answers {
            let reply = h.answer(raw);
            assert_bookkeeping(&h)?;

            if was_done {
                prop_assert!(reply.done);
                prop_assert_eq!(h.session.phase(), SessionPhase::Done);
            }
            was_done |= reply.done;
            prop_assert_eq!(reply.done, h.session.is_done());

            if h.session.reoffer_attempts() == 0 && h.session.phase() == SessionPhase::AwaitContinue {
                if let Some(id) = h.session.current_cluster() {
                    // Re-prompts keep the same word; only a new offer may not repeat.
                    if !matches!(Intent::normalize(raw), Intent::Other(_)) {
                        prop_assert!(offered_first_pass.insert(id), "word {} offered twice", id);
                    }
                }
            }

            if Intent::normalize(raw).is_exit() {
                prop_assert!(reply.done);
                let farewell = format!("\n{TEST_BLESSING}.");
                prop_assert!(reply.text.ends_with(&farewell));
            }
        }
    }

    #[test]
    fn saying_yes_to_everything_collects_every_word(n in 1usize..6, seed in any::<u64>()) {
        let mut h = Harness::new(n, seed);
        let mut replies = 0;
        while !h.session.is_done() {
            h.answer("yes");
            replies += 1;
            prop_assert!(replies <= 2 * n + 1, "session never finished");
        }
        prop_assert_eq!(h.session.accepted().len(), n);
        prop_assert_eq!(h.session.reoffer_attempts(), 0);
    }
}
