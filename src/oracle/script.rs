//! Deterministic judge for tests and offline evaluation.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{JudgeOracle, JudgeSignal, OracleError};
use crate::tourney::{CandidateSet, PairSchedule};

/// Judge that replays a pre-programmed sequence of responses.
///
/// Each call pops the next scripted response; once the script is
/// exhausted every further call reports the judge unavailable.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    responses: Mutex<Vec<Result<JudgeSignal, OracleError>>>,
}

impl ScriptedOracle {
    pub fn new(mut responses: Vec<Result<JudgeSignal, OracleError>>) -> Self {
        // Stored back-to-front so judge() can pop in script order.
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
        }
    }

    /// Script with a single response.
    pub fn once(response: Result<JudgeSignal, OracleError>) -> Self {
        Self::new(vec![response])
    }
}

#[async_trait]
impl JudgeOracle for ScriptedOracle {
    async fn judge(
        &self,
        _question: &str,
        _candidates: &CandidateSet,
        _schedule: &PairSchedule,
    ) -> Result<JudgeSignal, OracleError> {
        let mut responses = match self.responses.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        responses
            .pop()
            .unwrap_or_else(|| Err(OracleError::Unavailable("script exhausted".to_string())))
    }
}
