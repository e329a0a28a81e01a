//! Session aggregate - one user's reading.
//!
//! A session owns the offer pools for its conversation. It is created on
//! first contact, mutated only by [`Session::respond`], and frozen once its
//! phase reaches `Done`.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::content::ClusterId;
use crate::domain::foundation::{SessionId, StateMachine, Timestamp};

use super::SessionPhase;

/// How many times declined words are offered again per session.
pub const MAX_REOFFER_PASSES: u8 = 2;

/// Session aggregate.
///
/// # Invariants
///
/// - `remaining` and `rejected` are disjoint
/// - every cluster id is in `remaining`, in `rejected`, or already resolved
/// - `accepted` contains no duplicate titles and is append-only
/// - `reoffer_attempts` never exceeds [`MAX_REOFFER_PASSES`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(super) id: SessionId,
    pub(super) phase: SessionPhase,

    /// Never-offered cluster ids; offers pop from the tail.
    pub(super) remaining: Vec<ClusterId>,

    /// Offered-and-declined ids awaiting a re-offer pass.
    pub(super) rejected: Vec<ClusterId>,

    /// Accepted titles in acceptance order.
    pub(super) accepted: Vec<String>,

    pub(super) current_cluster: Option<ClusterId>,
    pub(super) first_offer_made: bool,
    pub(super) opening_guidance_shown: bool,
    pub(super) short_guidance_shown: bool,
    pub(super) reoffer_attempts: u8,

    pub(super) created_at: Timestamp,
    pub(super) last_active_at: Timestamp,
}

impl Session {
    /// Create a session in `Intro` with every cluster shuffled into the
    /// remaining pool.
    pub fn new(id: SessionId, cluster_count: usize, rng: &mut dyn RngCore) -> Self {
        let mut remaining: Vec<ClusterId> = (0..cluster_count).map(ClusterId::new).collect();
        remaining.shuffle(rng);

        let now = Timestamp::now();
        Self {
            id,
            phase: SessionPhase::Intro,
            remaining,
            rejected: Vec::new(),
            accepted: Vec::new(),
            current_cluster: None,
            first_offer_made: false,
            opening_guidance_shown: false,
            short_guidance_shown: false,
            reoffer_attempts: 0,
            created_at: now,
            last_active_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns true once the reading is over.
    pub fn is_done(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Never-offered cluster ids, in reverse offer order.
    pub fn remaining(&self) -> &[ClusterId] {
        &self.remaining
    }

    pub fn rejected(&self) -> &[ClusterId] {
        &self.rejected
    }

    /// Titles the user accepted, in acceptance order.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// The cluster awaiting a yes/no decision.
    pub fn current_cluster(&self) -> Option<ClusterId> {
        self.current_cluster
    }

    pub fn first_offer_made(&self) -> bool {
        self.first_offer_made
    }

    pub fn reoffer_attempts(&self) -> u8 {
        self.reoffer_attempts
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_active_at(&self) -> &Timestamp {
        &self.last_active_at
    }

    /// Returns true if the session has seen no turn since `cutoff`.
    pub fn is_idle_since(&self, cutoff: &Timestamp) -> bool {
        self.last_active_at.is_before(cutoff)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Phase changes
    // ─────────────────────────────────────────────────────────────────────────

    /// Move to `target` along the transition table.
    ///
    /// An edge outside the table closes the session instead.
    pub(super) fn enter(&mut self, target: SessionPhase) {
        if self.phase == target {
            return;
        }
        match self.phase.transition_to(target) {
            Ok(next) => self.phase = next,
            Err(err) => {
                tracing::warn!(
                    session_id = %self.id,
                    from = self.phase.label(),
                    to = target.label(),
                    "Rejected phase transition, closing session: {}",
                    err
                );
                self.phase = SessionPhase::Done;
            }
        }
    }
}
