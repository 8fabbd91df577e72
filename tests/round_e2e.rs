use std::collections::BTreeSet;

use async_trait::async_trait;

use ordinal_harness::{
    judge_round, parse_signal, Candidate, CandidateSet, JudgeOracle, JudgeSignal, OracleError,
    PairSchedule, ScriptedOracle, Verdict,
};

fn set(ids: &[&str]) -> CandidateSet {
    CandidateSet::new(
        ids.iter()
            .map(|id| Candidate {
                id: id.to_string(),
                text: format!("answer from {id}"),
            })
            .collect(),
    )
    .unwrap()
}

fn good_of(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[tokio::test]
async fn round_with_verdicts_ranks_by_wins() {
    let candidates = set(&["a", "b", "c"]);
    // Schedule order for three candidates: (a,b),(b,a),(a,c),(c,a),(b,c),(c,b).
    let verdicts = vec![
        Verdict::Winner("b".to_string()),
        Verdict::Winner("b".to_string()),
        Verdict::Winner("a".to_string()),
        Verdict::Winner("a".to_string()),
        Verdict::Winner("b".to_string()),
        Verdict::Winner("b".to_string()),
    ];
    let oracle = ScriptedOracle::once(Ok(JudgeSignal::Verdicts(verdicts)));

    let ballot = judge_round(&oracle, "which answer is best?", &candidates).await;
    assert_eq!(ballot.order, vec!["b", "a", "c"]);
    assert_eq!(ballot.good, good_of(&["b"]));
}

#[tokio::test]
async fn direct_ranking_is_repaired_before_acceptance() {
    let candidates = set(&["a", "b", "c"]);
    let oracle = ScriptedOracle::once(Ok(JudgeSignal::Ranking {
        order: vec!["ghost".to_string(), "c".to_string(), "a".to_string()],
        good: vec!["ghost".to_string()],
    }));

    let ballot = judge_round(&oracle, "q", &candidates).await;
    // Ghost dropped, missing "b" appended, emptied good set repaired.
    assert_eq!(ballot.order, vec!["c", "a", "b"]);
    assert_eq!(ballot.good, good_of(&["c"]));
}

#[tokio::test]
async fn unavailable_judge_degrades_to_input_order() {
    let candidates = set(&["A", "B", "C", "D"]);
    let oracle = ScriptedOracle::once(Err(OracleError::Unavailable("timeout".to_string())));

    let ballot = judge_round(&oracle, "q", &candidates).await;
    assert_eq!(ballot.order, vec!["A", "B", "C", "D"]);
    assert_eq!(ballot.good, good_of(&["A", "B"]));
}

#[tokio::test]
async fn unparsable_response_degrades_to_input_order() {
    let candidates = set(&["A", "B", "C", "D"]);
    let err = parse_signal("I refuse to rank these answers.").unwrap_err();
    let oracle = ScriptedOracle::once(Err(err));

    let ballot = judge_round(&oracle, "q", &candidates).await;
    assert_eq!(ballot.order, vec!["A", "B", "C", "D"]);
    assert_eq!(ballot.good, good_of(&["A", "B"]));
}

struct UnreachableJudge;

#[async_trait]
impl JudgeOracle for UnreachableJudge {
    async fn judge(
        &self,
        _question: &str,
        _candidates: &CandidateSet,
        _schedule: &PairSchedule,
    ) -> Result<JudgeSignal, OracleError> {
        panic!("judge must not be consulted for a single-candidate round");
    }
}

#[tokio::test]
async fn single_candidate_round_never_consults_the_judge() {
    let candidates = set(&["only"]);
    let ballot = judge_round(&UnreachableJudge, "q", &candidates).await;
    assert_eq!(ballot.order, vec!["only"]);
    assert_eq!(ballot.good, good_of(&["only"]));
}

#[tokio::test]
async fn rounds_are_independent_across_one_script() {
    let candidates = set(&["p", "q"]);
    let oracle = ScriptedOracle::new(vec![
        Ok(JudgeSignal::Verdicts(vec![
            Verdict::Winner("q".to_string()),
            Verdict::Winner("q".to_string()),
        ])),
        Err(OracleError::Unavailable("gone".to_string())),
    ]);

    let informed = judge_round(&oracle, "q", &candidates).await;
    assert_eq!(informed.order, vec!["q", "p"]);

    let degraded = judge_round(&oracle, "q", &candidates).await;
    assert_eq!(degraded.order, vec!["p", "q"]);
    assert_eq!(degraded.good, good_of(&["p"]));
}
