//! Session domain module - the reading state machine.
//!
//! A session offers word clusters one at a time. Unseen words come first, in
//! a per-session shuffled order with no repeats; declined words get at most
//! two re-offer passes once the unseen pool is exhausted. Every answer yields
//! exactly one reply, and quit/stop always end with the closing summary.

mod aggregate;
mod closing;
mod errors;
mod intent;
pub mod lines;
mod offer;
mod phase;
mod transition;
mod turn;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod proptests;

pub use aggregate::{Session, MAX_REOFFER_PASSES};
pub use closing::summary_text;
pub use errors::SessionError;
pub use intent::Intent;
pub use phase::SessionPhase;
pub use turn::{OfferRules, Reply, TurnContext, DEFAULT_AUTHORED_QUESTION_PROBABILITY};
