//! Session behavior configuration

use serde::Deserialize;

use crate::domain::session::{OfferRules, DEFAULT_AUTHORED_QUESTION_PROBABILITY};

use super::error::ValidationError;

/// Upper bound for session durations: ten years.
pub const MAX_SESSION_DURATION_SECS: u64 = 10 * 365 * 86_400;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Chance that an offer uses the cluster's own question
    #[serde(default = "default_authored_question_probability")]
    pub authored_question_probability: f64,

    /// Seconds without a turn before a session is evicted (0 keeps sessions forever)
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_secs: u64,

    /// Seconds between eviction sweeps
    #[serde(default = "default_eviction_interval")]
    pub eviction_interval_secs: u64,

    /// Name of the cookie carrying the session id
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl SessionConfig {
    pub fn offer_rules(&self) -> OfferRules {
        OfferRules::new(self.authored_question_probability)
    }

    pub fn eviction_enabled(&self) -> bool {
        self.idle_ttl_secs > 0
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let p = self.authored_question_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ValidationError::InvalidProbability(p));
        }
        if self.idle_ttl_secs > MAX_SESSION_DURATION_SECS {
            return Err(ValidationError::InvalidIdleTtl(self.idle_ttl_secs));
        }
        if self.eviction_enabled()
            && !(1..=MAX_SESSION_DURATION_SECS).contains(&self.eviction_interval_secs)
        {
            return Err(ValidationError::InvalidEvictionInterval);
        }
        if self.cookie_name.trim().is_empty() {
            return Err(ValidationError::EmptyCookieName);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            authored_question_probability: default_authored_question_probability(),
            idle_ttl_secs: default_idle_ttl(),
            eviction_interval_secs: default_eviction_interval(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_authored_question_probability() -> f64 {
    DEFAULT_AUTHORED_QUESTION_PROBABILITY
}

fn default_idle_ttl() -> u64 {
    86_400
}

fn default_eviction_interval() -> u64 {
    300
}

fn default_cookie_name() -> String {
    "wp_sid".to_string()
}
