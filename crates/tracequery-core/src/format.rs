//! Output format handling for tracequery
//!
//! Supports three output formats:
//! - human: one answer per line, absent costs shown as `NO SUCH TRACE`
//! - json: a JSON array of `{query, kind, result}` objects
//! - records: line-oriented `Q` records for scripts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};
use crate::plan::{Answer, QueryOutcome};

/// Display text for a cost that does not exist
pub const NO_SUCH_TRACE: &str = "NO SUCH TRACE";

/// Render an optional result, using [`NO_SUCH_TRACE`] when absent
pub fn result_msg<T: fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NO_SUCH_TRACE.to_string())
}

/// Output format for query answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(TraceError::UsageError(format!(
                "unknown format: {} (expected: human, json, or records)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    query: String,
    kind: &'static str,
    result: &'a Answer,
}

/// Render answers in the requested format, newline terminated
pub fn render(outcomes: &[QueryOutcome], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            for outcome in outcomes {
                out.push_str(&outcome.answer.to_string());
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let entries: Vec<JsonOutcome> = outcomes
                .iter()
                .map(|outcome| JsonOutcome {
                    query: outcome.query.describe(),
                    kind: outcome.query.kind(),
                    result: &outcome.answer,
                })
                .collect();
            out.push_str(&serde_json::to_string_pretty(&entries)?);
            out.push('\n');
        }
        OutputFormat::Records => {
            for (i, outcome) in outcomes.iter().enumerate() {
                let result = match outcome.answer {
                    Answer::Cost(None) => "none".to_string(),
                    answer => answer.to_string(),
                };
                out.push_str(&format!(
                    "Q {} kind={} query=\"{}\" result={}\n",
                    i + 1,
                    outcome.query.kind(),
                    outcome.query.describe(),
                    result
                ));
            }
        }
    }
    Ok(out)
}
