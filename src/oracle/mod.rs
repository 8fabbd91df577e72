//! Judge oracle boundary.
//!
//! The judge is an unreliable, loosely typed collaborator, in production
//! a language model behind a network hop. It is modeled as a small
//! capability trait so the aggregation pipeline can be driven by a
//! deterministic scripted judge in tests. Transport, prompt rendering,
//! and session lifecycle belong to adapter implementations, not here.

pub mod parse;
pub mod script;

use async_trait::async_trait;
use thiserror::Error;

use crate::tourney::{CandidateSet, PairSchedule, Verdict};

pub use parse::parse_signal;
pub use script::ScriptedOracle;

/// What a judge can hand back for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeSignal {
    /// One verdict per scheduled comparison, aligned positionally.
    Verdicts(Vec<Verdict>),
    /// A full ranking produced directly, best first, plus the IDs the
    /// judge considered good enough. Bypasses win counting; still
    /// reconciled before acceptance.
    Ranking {
        order: Vec<String>,
        good: Vec<String>,
    },
}

/// Errors from the judge boundary.
///
/// Every variant degrades the round to the fallback ballot; none of them
/// fail a round or reach the caller.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The response could not be interpreted as verdicts or a ranking.
    #[error("unparsable judge response: {0}")]
    UnparsableVerdicts(String),
    /// The judge could not be reached or returned nothing.
    #[error("judge unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface for the external judge.
#[async_trait]
pub trait JudgeOracle: Send + Sync {
    /// Judge one round. The adapter renders the question, candidates, and
    /// schedule into whatever its backend expects and maps the response
    /// back into a [`JudgeSignal`].
    async fn judge(
        &self,
        question: &str,
        candidates: &CandidateSet,
        schedule: &PairSchedule,
    ) -> Result<JudgeSignal, OracleError>;
}
