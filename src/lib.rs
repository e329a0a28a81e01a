//! Word Psychic - a turn-based word reading service.
//!
//! A session offers word clusters one at a time and reacts to yes, no, quit
//! and stop answers, ending with a summary of the words the user accepted.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
