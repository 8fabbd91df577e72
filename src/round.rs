//! One judging round, end to end.
//!
//! Control flow: candidate set → comparison schedule → judge → win tally
//! (or direct-ranking passthrough) → reconciliation. The reconciler runs
//! on every path, including the fallback, so the returned ballot always
//! covers the candidate set exactly once.

use tracing::warn;

use crate::oracle::{JudgeOracle, JudgeSignal};
use crate::tourney::{
    aggregate, fallback_ballot, generate_schedule, reconcile, Ballot, CandidateSet,
};

/// Run one judging round and produce a submittable ballot.
///
/// Judge failure never fails the round: an unreachable or unparsable
/// judge degrades to the input-order fallback with a warning. Holds no
/// state across rounds, so concurrent rounds are independent.
pub async fn judge_round<O>(oracle: &O, question: &str, candidates: &CandidateSet) -> Ballot
where
    O: JudgeOracle + ?Sized,
{
    let schedule = generate_schedule(candidates);

    if schedule.is_empty() {
        // Single candidate: nothing to compare, nothing to ask.
        return reconcile(candidates, aggregate(candidates, &schedule, &[]));
    }

    let ballot = match oracle.judge(question, candidates, &schedule).await {
        Ok(JudgeSignal::Verdicts(verdicts)) => aggregate(candidates, &schedule, &verdicts),
        Ok(JudgeSignal::Ranking { order, good }) => Ballot {
            order,
            good: good.into_iter().collect(),
        },
        Err(err) => {
            warn!(error = %err, "judge failed; falling back to input-order ballot");
            fallback_ballot(candidates)
        }
    };

    reconcile(candidates, ballot)
}
