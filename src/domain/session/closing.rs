//! Summary and closing text.

use crate::domain::content::VariantPool;

use super::lines::{ENCOURAGEMENT, NOTHING_REVEALED, SUMMARY_HEADER};
use super::{lines, Session, TurnContext};

/// List accepted titles, blank-line separated, in acceptance order.
pub fn summary_text(accepted: &[String]) -> String {
    if accepted.is_empty() {
        return NOTHING_REVEALED.to_string();
    }
    format!("{SUMMARY_HEADER}\n\n{}", accepted.join("\n\n"))
}

/// Ensure a farewell ends with terminal punctuation.
fn punctuate(line: &str) -> String {
    let line = line.trim();
    if line.is_empty() {
        return lines::fallback(VariantPool::ExitBlessing).to_string();
    }
    if line.ends_with(['.', '!', '?']) {
        line.to_string()
    } else {
        format!("{line}.")
    }
}

impl Session {
    /// Summary of accepted words, without the farewell.
    pub fn summary(&self) -> String {
        summary_text(&self.accepted)
    }

    /// Closing block: summary, encouragement when anything was accepted, and
    /// exactly one farewell line last.
    pub fn closing(&self, ctx: &mut TurnContext<'_>) -> String {
        let mut closing = self.summary();
        if !self.accepted.is_empty() {
            closing.push_str("\n\n");
            closing.push_str(ENCOURAGEMENT);
        }
        let blessing = ctx.phrase(VariantPool::ExitBlessing);
        closing.push('\n');
        closing.push_str(&punctuate(&blessing));
        closing
    }
}
