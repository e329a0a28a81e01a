//! Deterministic content and helpers for driving sessions in tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::content::{Cluster, ClusterId, VariantPool};
use crate::domain::foundation::SessionId;
use crate::ports::ContentProvider;

use super::{Intent, OfferRules, Reply, Session, TurnContext};

/// Farewell without terminal punctuation, to exercise normalization.
pub const TEST_BLESSING: &str = "Go gently, seeker";

/// Catalog of `n` numbered clusters with one phrase per pool.
pub struct FixedContent {
    clusters: Vec<Cluster>,
    pools: Vec<(VariantPool, Vec<String>)>,
}

impl FixedContent {
    pub fn new(n: usize) -> Self {
        let clusters = (0..n)
            .map(|i| Cluster {
                title: format!("Word{i} → Second{i} → Third{i}"),
                intro_line: format!("Your word is “word{i}.”\n\n"),
                continue_question: format!("Authored question {i}?"),
                script: format!("Script {i}.\nYour fortune: number {i}."),
            })
            .collect();
        let pools = VariantPool::ALL
            .into_iter()
            .map(|pool| (pool, vec![Self::phrase(pool)]))
            .collect();
        Self { clusters, pools }
    }

    /// The single phrase in a pool.
    pub fn phrase(pool: VariantPool) -> String {
        match pool {
            VariantPool::ExitBlessing => TEST_BLESSING.to_string(),
            other => format!("<{}>", other.key()),
        }
    }

    pub fn title(&self, id: ClusterId) -> &str {
        &self.clusters[id.index()].title
    }
}

impl ContentProvider for FixedContent {
    fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    fn cluster(&self, id: ClusterId) -> Option<&Cluster> {
        self.clusters.get(id.index())
    }

    fn variants(&self, pool: VariantPool) -> &[String] {
        self.pools
            .iter()
            .find(|(p, _)| *p == pool)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }
}

/// A session plus everything needed to drive it turn by turn.
pub struct Harness {
    pub content: FixedContent,
    pub session: Session,
    pub rng: StdRng,
    pub rules: OfferRules,
}

impl Harness {
    pub fn new(n: usize, seed: u64) -> Self {
        let content = FixedContent::new(n);
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Session::new(SessionId::new(), n, &mut rng);
        Self {
            content,
            session,
            rng,
            rules: OfferRules::default(),
        }
    }

    /// Always use the generic question pool.
    pub fn with_pool_questions(mut self) -> Self {
        self.rules = OfferRules::new(0.0);
        self
    }

    pub fn answer(&mut self, raw: &str) -> Reply {
        let intent = Intent::normalize(raw);
        let mut ctx = TurnContext::new(&self.content, &mut self.rng, self.rules);
        self.session.respond(&intent, &mut ctx)
    }

    /// Id of the next word Offer-Next will draw from the unseen pool.
    pub fn next_offer(&self) -> Option<ClusterId> {
        self.session.remaining().last().copied()
    }
}
