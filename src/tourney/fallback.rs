//! Degraded ranking for rounds where the judge produced nothing usable.

use super::tally::good_count;
use super::types::{Ballot, CandidateSet};

/// Ballot used when no verdicts could be obtained: the input order, with
/// the first half of the field (at least one) marked good. It carries no
/// preference information but always gives the caller something
/// submittable.
pub fn fallback_ballot(candidates: &CandidateSet) -> Ballot {
    let order: Vec<String> = candidates.ids().map(str::to_owned).collect();
    let good = order.iter().take(good_count(order.len())).cloned().collect();
    Ballot { order, good }
}
