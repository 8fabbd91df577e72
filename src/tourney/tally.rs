//! Win counting and rank aggregation.
//!
//! Verdicts are untrusted: they may name candidates outside the scheduled
//! pair, outside the round entirely, or not cover the schedule at all.
//! Every malformed or missing entry simply contributes zero information;
//! an all-zero tally degrades to the input order.

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::debug;

use super::types::{Ballot, CandidateSet, PairSchedule, Verdict};

/// Running win counts for one round.
///
/// Initialized to zero for every candidate. Counts only increase while
/// verdicts are applied and are frozen once ranking begins.
#[derive(Debug)]
pub struct WinTally {
    wins: HashMap<String, u32>,
}

impl WinTally {
    pub fn new(candidates: &CandidateSet) -> Self {
        Self {
            wins: candidates.ids().map(|id| (id.to_string(), 0)).collect(),
        }
    }

    /// Credit a win to `id`. Returns false (and records nothing) when the
    /// ID is not part of the round.
    pub fn record_win(&mut self, id: &str) -> bool {
        match self.wins.get_mut(id) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn wins(&self, id: &str) -> u32 {
        self.wins.get(id).copied().unwrap_or(0)
    }
}

/// How many candidates count as good: half the field, floored, at least one.
pub fn good_count(n: usize) -> usize {
    (n / 2).max(1)
}

/// Tally verdicts into a ballot.
///
/// Verdict position i answers comparison i of the schedule; entries past
/// the end of the schedule are ignored. Equal win counts keep their input
/// order, so the ballot is reproducible for identical inputs and
/// verdicts. The result has not yet been reconciled; see
/// [`super::reconcile::reconcile`].
pub fn aggregate(
    candidates: &CandidateSet,
    schedule: &PairSchedule,
    verdicts: &[Verdict],
) -> Ballot {
    if candidates.len() == 1 {
        // A lone candidate is trivially best and good; verdicts are never
        // consulted.
        let id = candidates.candidates()[0].id.clone();
        return Ballot {
            order: vec![id.clone()],
            good: [id].into(),
        };
    }

    let mut tally = WinTally::new(candidates);
    for (pair, verdict) in schedule.pairs().iter().zip(verdicts) {
        let Verdict::Winner(winner) = verdict else {
            continue;
        };
        if pair.involves(winner) && tally.record_win(winner) {
            continue;
        }
        debug!(%winner, "verdict names a candidate outside the scheduled pair; ignored");
    }

    ranked_ballot(candidates, &tally)
}

fn ranked_ballot(candidates: &CandidateSet, tally: &WinTally) -> Ballot {
    let mut order: Vec<String> = candidates.ids().map(str::to_owned).collect();
    // Stable sort: ties in win count preserve input order.
    order.sort_by_key(|id| Reverse(tally.wins(id)));

    let good = order.iter().take(good_count(order.len())).cloned().collect();
    Ballot { order, good }
}
