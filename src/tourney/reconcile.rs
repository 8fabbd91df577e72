//! Ballot repair against the authoritative candidate set.
//!
//! Judge output may drop candidates, invent IDs, or repeat entries.
//! Reconciliation is the single invariant-enforcing path: it runs after
//! every aggregation and after the fallback, and guarantees the ballot
//! covers the candidate set exactly once with a non-empty good set.

use std::collections::{BTreeSet, HashSet};

use super::types::{Ballot, CandidateSet};

/// Repair a ballot so it exactly covers the candidate set.
///
/// Missing IDs are appended at the end in input order (the
/// lowest-confidence placement for anything the judge dropped), unknown
/// IDs are removed, duplicates keep their first occurrence, and a good
/// set emptied by filtering becomes the top of the corrected order.
/// Idempotent: an already-consistent ballot comes back unchanged.
pub fn reconcile(candidates: &CandidateSet, ballot: Ballot) -> Ballot {
    let Ballot { mut order, good } = ballot;

    // Append anything the judge dropped.
    let missing: Vec<String> = candidates
        .ids()
        .filter(|id| !order.iter().any(|o| o == id))
        .map(str::to_owned)
        .collect();
    order.extend(missing);

    // Remove hallucinated IDs, then duplicates.
    order.retain(|id| candidates.contains_id(id));
    let mut seen = HashSet::new();
    order.retain(|id| seen.insert(id.clone()));

    // The good set must stay within the round and never end up empty.
    let mut good: BTreeSet<String> = good
        .into_iter()
        .filter(|id| candidates.contains_id(id))
        .collect();
    if good.is_empty() {
        if let Some(top) = order.first() {
            good.insert(top.clone());
        }
    }

    Ballot { order, good }
}
