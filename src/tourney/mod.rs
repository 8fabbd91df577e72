//! Pairwise-tournament ranking primitives.
//!
//! The pipeline for one judging round: comparison schedule → verdict
//! tally → reconciliation against the authoritative candidate set, with a
//! deterministic fallback when the judge produced nothing usable. Each
//! step is a pure function of its inputs; [`crate::round`] wires them
//! together.

pub mod fallback;
pub mod reconcile;
pub mod schedule;
pub mod tally;
pub mod types;

pub use fallback::fallback_ballot;
pub use reconcile::reconcile;
pub use schedule::generate_schedule;
pub use tally::{aggregate, good_count, WinTally};
pub use types::{Ballot, Candidate, CandidateSet, Pair, PairSchedule, TourneyError, Verdict};
