//! Structured JSONL records for harness runs.
//!
//! One record per executed case, plus a trailing summary record, written
//! as single-line JSON so runs can be diffed and filtered with standard
//! tooling.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::runner::CaseOutcome;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Canonical JSONL log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Record type: "case" or "summary".
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    pub fn for_case(outcome: &CaseOutcome) -> Self {
        Self {
            level: if outcome.passed {
                LogLevel::Info
            } else {
                LogLevel::Error
            },
            event: "case".into(),
            case: Some(outcome.name.clone()),
            passed: Some(outcome.passed),
            detail: if outcome.passed {
                None
            } else {
                Some(format!(
                    "got {:?}, expected {:?}",
                    outcome.got, outcome.expected
                ))
            },
        }
    }

    pub fn summary(total: usize, failed: usize) -> Self {
        Self {
            level: if failed == 0 {
                LogLevel::Info
            } else {
                LogLevel::Error
            },
            event: "summary".into(),
            case: None,
            passed: Some(failed == 0),
            detail: Some(format!("{}/{} cases passed", total - failed, total)),
        }
    }

    /// Write the record as one JSONL line.
    pub fn emit<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let line = serde_json::to_string(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{line}")
    }
}
