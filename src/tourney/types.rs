//! Data model for one judging round.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One of the items being ranked: an answer with a stable identifier.
///
/// `text` is never interpreted by the ranking logic; it exists only to be
/// forwarded to the judge.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Candidate {
    /// Stable identifier, unique within a round.
    pub id: String,
    /// Answer content shown to the judge.
    pub text: String,
}

/// Errors surfaced to the caller of a judging round.
#[derive(Debug, thiserror::Error)]
pub enum TourneyError {
    /// A round was requested with zero candidates. This is a bug in the
    /// orchestrator, not a judge failure; don't retry it blindly.
    #[error("candidate set is empty")]
    EmptyCandidateSet,
}

/// Non-empty, order-preserving sequence of candidates for one round.
///
/// Input order is load-bearing: it breaks ties between equal win counts
/// and places reconciliation repairs. Duplicate IDs in the input violate
/// the caller contract but are tolerated; the reconciler never emits them.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Build a candidate set, rejecting empty input.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, TourneyError> {
        if candidates.is_empty() {
            return Err(TourneyError::EmptyCandidateSet);
        }
        Ok(Self { candidates })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Candidate IDs in input order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.id.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.candidates.iter().any(|c| c.id == id)
    }
}

/// One scheduled comparison: "is `a` preferred over `b`?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub a: String,
    pub b: String,
}

impl Pair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Whether `id` is one of the two sides.
    pub fn involves(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }
}

/// Deduplicated sequence of comparisons for one round.
///
/// Verdicts align with it positionally, so its order must be a pure
/// function of the candidate input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PairSchedule {
    pairs: Vec<Pair>,
}

impl PairSchedule {
    pub(crate) fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The judge's answer to one scheduled comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The named candidate won the comparison.
    Winner(String),
    /// No preference either way; contributes to neither tally.
    Tie,
}

/// The submittable outcome of a judging round: every candidate exactly
/// once, best to worst, plus the subset deemed good enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ballot {
    /// All candidate IDs, best first.
    pub order: Vec<String>,
    /// IDs judged good enough. Non-empty whenever the round had candidates.
    pub good: BTreeSet<String>,
}
