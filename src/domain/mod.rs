//! Domain layer containing the reading rules and their value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine trait)
//! - `content` - Word clusters and phrase pool keys
//! - `session` - The per-user reading state machine

pub mod content;
pub mod foundation;
pub mod session;
