//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single conformance case: one format string, its arguments, and
/// either the expected text or the expected error kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// printf format string.
    pub format: String,
    /// Ordered argument values.
    #[serde(default)]
    pub arguments: Vec<FixtureArg>,
    /// Expected rendered output, for cases that succeed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Expected error kind (see `FormatError::kind`), for cases that fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
}

/// JSON-serializable argument value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FixtureArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    NullStr,
    Pointer(u64),
    NullPointer,
}

/// A collection of fixture cases for one directive family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Directive family name (e.g. "integer", "positional").
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|source| HarnessError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_round_trip() {
        let set = FixtureSet {
            version: "1".into(),
            family: "integer".into(),
            cases: vec![FixtureCase {
                name: "basic_decimal".into(),
                format: "%d".into(),
                arguments: vec![FixtureArg::Int(42)],
                expected_output: Some("42".into()),
                expected_error: None,
            }],
        };
        let json = set.to_json().unwrap();
        let parsed = FixtureSet::from_json(&json).unwrap();
        assert_eq!(parsed.cases.len(), 1);
        assert_eq!(parsed.cases[0].format, "%d");
    }

    #[test]
    fn test_error_case_parses() {
        let json = r#"{
            "version": "1",
            "family": "errors",
            "cases": [{
                "name": "index_zero",
                "format": "%0$d",
                "arguments": [{"type": "int", "value": 1}],
                "expected_error": "argument_index_out_of_range"
            }]
        }"#;
        let set = FixtureSet::from_json(json).unwrap();
        assert_eq!(
            set.cases[0].expected_error.as_deref(),
            Some("argument_index_out_of_range")
        );
        assert!(set.cases[0].expected_output.is_none());
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let err = FixtureSet::from_file(std::path::Path::new("/nonexistent/fixtures.json"))
            .unwrap_err();
        assert!(matches!(err, HarnessError::Io(_)));
    }
}
