//! Tolerant parsing of raw judge responses.
//!
//! Judges wrap their JSON in markdown fences, prefix it with prose, or
//! both. Extraction strips fences and takes the first balanced JSON
//! object or array; interpretation then accepts either a direct ranking
//! or a positional verdict list.

use serde::Deserialize;
use tracing::debug;

use super::{JudgeSignal, OracleError};
use crate::tourney::Verdict;

/// Marker a judge uses for a comparison with no winner.
pub const TIE_MARKER: &str = "TIE";

/// Longest response prefix echoed back in parse errors.
const ERROR_SNIPPET_CHARS: usize = 200;

// =============================================================================
// JSON parsing
// =============================================================================

/// Raw JSON structure for a direct-ranking response.
#[derive(Debug, Deserialize)]
struct RankingJson {
    rankings: Vec<String>,
    #[serde(default)]
    good: Vec<String>,
}

/// Parse a raw judge response into a signal.
///
/// A JSON object with a `rankings` array is a direct ranking; a JSON
/// array is a positional verdict list where the string `"TIE"` (any
/// case) means no winner. Array entries that aren't strings keep their
/// slot as ties so later verdicts stay aligned with the schedule. A
/// response yielding neither shape is [`OracleError::UnparsableVerdicts`].
pub fn parse_signal(raw: &str) -> Result<JudgeSignal, OracleError> {
    let payload = extract_payload(raw);

    if let Ok(ranking) = serde_json::from_str::<RankingJson>(payload) {
        return Ok(JudgeSignal::Ranking {
            order: ranking.rankings,
            good: ranking.good,
        });
    }

    if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(payload) {
        let verdicts = values
            .into_iter()
            .map(|value| match value {
                serde_json::Value::String(s) if s.eq_ignore_ascii_case(TIE_MARKER) => Verdict::Tie,
                serde_json::Value::String(s) => Verdict::Winner(s),
                other => {
                    debug!(entry = %other, "non-string verdict entry; treated as no-information");
                    Verdict::Tie
                }
            })
            .collect();
        return Ok(JudgeSignal::Verdicts(verdicts));
    }

    Err(OracleError::UnparsableVerdicts(snippet(raw)))
}

/// Extract the JSON payload from a response that may carry fences or
/// surrounding prose.
fn extract_payload(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        if let Some(end) = rest.rfind("```") {
            text = rest[..end].trim();
        }
    }

    // First balanced object or array, wherever it starts.
    let start = match (text.find('{'), text.find('[')) {
        (Some(obj), Some(arr)) => Some(obj.min(arr)),
        (obj, arr) => obj.or(arr),
    };
    let Some(start) = start else {
        return text;
    };

    let body = &text[start..];
    let (open, close) = if body.starts_with('{') {
        ('{', '}')
    } else {
        ('[', ']')
    };
    let mut depth = 0usize;
    for (i, c) in body.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return &body[..=i];
            }
        }
    }
    text
}

fn snippet(raw: &str) -> String {
    let mut s: String = raw.chars().take(ERROR_SNIPPET_CHARS).collect();
    if s.len() < raw.len() {
        s.push('…');
    }
    s
}
