//! Word clusters: the unit of offerable content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the words of a cluster title.
pub const TITLE_SEPARATOR: &str = " → ";

/// Position of a cluster in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(usize);

impl ClusterId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word cluster: three related words, example sentences and a fortune.
///
/// Immutable once loaded. The catalog owns every cluster; sessions refer to
/// them by [`ClusterId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Display title, e.g. `Prudent → Revere → Venerate`.
    pub title: String,

    /// Line shown the first time a word is offered in a session.
    pub intro_line: String,

    /// The cluster's own engagement question.
    pub continue_question: String,

    /// Full reveal: definitions, examples and the fortune.
    pub script: String,
}

impl Cluster {
    /// The first word of the title, used to announce later offers.
    pub fn head_term(&self) -> &str {
        self.title
            .split(TITLE_SEPARATOR)
            .next()
            .unwrap_or(&self.title)
            .trim()
    }

    /// The authored question, if it has any content.
    pub fn authored_question(&self) -> Option<&str> {
        let question = self.continue_question.trim();
        (!question.is_empty()).then_some(question)
    }
}
