//! Comparison schedule generation.
//!
//! Fixed-size scheduling: each candidate meets its ring neighbor and its
//! skip-one neighbor, and every surviving matchup is asked in both
//! directions. That is O(N) comparisons instead of the O(N²) full
//! round-robin, while still giving every candidate several independent
//! comparisons to accumulate wins from.

use super::types::{CandidateSet, Pair, PairSchedule};

/// Build the comparison schedule for a round.
///
/// Deterministic: the output is a pure function of the candidate input
/// order, so two calls with the same set are identical and verdicts can
/// be aligned positionally. A single-candidate round yields an empty
/// schedule.
pub fn generate_schedule(candidates: &CandidateSet) -> PairSchedule {
    let ids: Vec<&str> = candidates.ids().collect();
    let n = ids.len();
    if n < 2 {
        return PairSchedule::default();
    }

    // Undirected matchups: ring neighbor and skip-one neighbor for every
    // index, deduplicated regardless of orientation. At n = 2 the
    // skip-one relation wraps onto itself and is dropped.
    let mut matchups: Vec<(usize, usize)> = Vec::with_capacity(2 * n);
    for i in 0..n {
        for j in [(i + 1) % n, (i + 2) % n] {
            if i == j {
                continue;
            }
            if !matchups
                .iter()
                .any(|&(a, b)| (a, b) == (i, j) || (a, b) == (j, i))
            {
                matchups.push((i, j));
            }
        }
    }

    // Both directions of every matchup. With unique IDs neither guard
    // can fire; duplicated input IDs are repaired here instead of
    // propagating into the schedule.
    let mut pairs: Vec<Pair> = Vec::with_capacity(2 * matchups.len());
    for (i, j) in matchups {
        if ids[i] == ids[j] {
            continue;
        }
        for pair in [Pair::new(ids[i], ids[j]), Pair::new(ids[j], ids[i])] {
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
    }

    PairSchedule::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tourney::types::Candidate;

    fn set(ids: &[&str]) -> CandidateSet {
        CandidateSet::new(
            ids.iter()
                .map(|id| Candidate {
                    id: id.to_string(),
                    text: String::new(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_candidate_yields_empty_schedule() {
        assert!(generate_schedule(&set(&["only"])).is_empty());
    }

    #[test]
    fn two_candidates_meet_once_in_each_direction() {
        let schedule = generate_schedule(&set(&["a", "b"]));
        assert_eq!(
            schedule.pairs(),
            &[Pair::new("a", "b"), Pair::new("b", "a")]
        );
    }

    #[test]
    fn three_candidates_cover_all_matchups_both_ways() {
        let schedule = generate_schedule(&set(&["x", "y", "z"]));
        assert_eq!(schedule.len(), 6);
        for pair in schedule.pairs() {
            assert_ne!(pair.a, pair.b);
            assert!(schedule
                .pairs()
                .iter()
                .any(|p| p.a == pair.b && p.b == pair.a));
        }
    }

    #[test]
    fn no_self_pairs_or_duplicate_directions_at_any_size() {
        for n in 2..=9 {
            let ids: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let schedule = generate_schedule(&set(&refs));

            for (k, pair) in schedule.pairs().iter().enumerate() {
                assert_ne!(pair.a, pair.b, "self-pair at n={n}");
                assert!(
                    !schedule.pairs()[..k].contains(pair),
                    "duplicate directional pair at n={n}"
                );
            }
        }
    }

    #[test]
    fn schedule_is_deterministic() {
        let candidates = set(&["p", "q", "r", "s", "t"]);
        assert_eq!(
            generate_schedule(&candidates),
            generate_schedule(&candidates)
        );
    }

    #[test]
    fn duplicate_input_ids_do_not_duplicate_comparisons() {
        let schedule = generate_schedule(&set(&["a", "a", "b"]));
        for (k, pair) in schedule.pairs().iter().enumerate() {
            assert_ne!(pair.a, pair.b);
            assert!(!schedule.pairs()[..k].contains(pair));
        }
    }
}
