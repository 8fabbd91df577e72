#![forbid(unsafe_code)]

//! # ordinal-harness
//!
//! Turns a pool of independently produced answers into a single ranked
//! order plus a "good enough" subset, using only pairwise preference
//! verdicts from an external judge.
//!
//! Rather than trusting a judge to emit one consistent ranking in a
//! single shot, ordinal-harness schedules a bounded set of pairwise
//! comparisons (ring neighbor + skip-one neighbor, both directions),
//! counts wins, and repairs whatever comes back against the
//! authoritative candidate set. Judge output is untrusted input
//! throughout: malformed verdicts contribute nothing, hallucinated IDs
//! are filtered, omissions are appended, and a judge that fails outright
//! still yields a usable (if uninformed) ballot.
//!
//! The judge itself is behind the [`oracle::JudgeOracle`] trait;
//! [`round::judge_round`] drives a full round against any implementation
//! of it.

pub mod oracle;
pub mod round;
pub mod tourney;

pub use oracle::{parse_signal, JudgeOracle, JudgeSignal, OracleError, ScriptedOracle};
pub use round::judge_round;
pub use tourney::{
    aggregate, fallback_ballot, generate_schedule, good_count, reconcile, Ballot, Candidate,
    CandidateSet, Pair, PairSchedule, TourneyError, Verdict, WinTally,
};
