//! Fixture execution against the format engine.

use printfc_core::{sprintf, Argument, ArgumentList};

use crate::fixtures::{FixtureArg, FixtureCase, FixtureSet};

/// Result of one executed fixture case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    /// What the engine produced: rendered text, or an error kind.
    pub got: String,
    /// What the fixture expected.
    pub expected: String,
}

/// Run a single fixture case.
pub fn run_case(case: &FixtureCase) -> CaseOutcome {
    let args: Vec<Argument<'_>> = case.arguments.iter().map(to_argument).collect();
    let list = ArgumentList::new(&args);
    let (got, passed) = match sprintf(&case.format, &list) {
        Ok(text) => {
            let passed = case.expected_output.as_deref() == Some(text.as_str());
            (text, passed)
        }
        Err(err) => {
            let kind = err.kind().to_string();
            let passed = case.expected_error.as_deref() == Some(kind.as_str());
            (format!("error: {kind}"), passed)
        }
    };
    let expected = case
        .expected_output
        .clone()
        .or_else(|| case.expected_error.as_ref().map(|e| format!("error: {e}")))
        .unwrap_or_default();
    CaseOutcome {
        name: case.name.clone(),
        passed,
        got,
        expected,
    }
}

/// Run every case in a fixture set.
pub fn run_set(set: &FixtureSet) -> Vec<CaseOutcome> {
    set.cases.iter().map(run_case).collect()
}

fn to_argument(arg: &FixtureArg) -> Argument<'_> {
    match arg {
        FixtureArg::Int(v) => Argument::I64(*v),
        FixtureArg::Uint(v) => Argument::U64(*v),
        FixtureArg::Float(v) => Argument::F64(*v),
        FixtureArg::Bool(v) => Argument::Bool(*v),
        FixtureArg::Char(v) => Argument::Char(*v),
        FixtureArg::Str(v) => Argument::Str(v),
        FixtureArg::NullStr => Argument::CStr(None),
        FixtureArg::Pointer(v) => Argument::Pointer(*v as usize),
        FixtureArg::NullPointer => Argument::Pointer(0),
    }
}

/// Built-in smoke fixture set, used by the `demo` subcommand and as a
/// self-check in tests.
pub fn builtin_set() -> FixtureSet {
    let case = |name: &str, format: &str, arguments: Vec<FixtureArg>, expected: &str| FixtureCase {
        name: name.into(),
        format: format.into(),
        arguments,
        expected_output: Some(expected.into()),
        expected_error: None,
    };
    FixtureSet {
        version: "1".into(),
        family: "builtin".into(),
        cases: vec![
            case("decimal", "%d", vec![FixtureArg::Int(42)], "42"),
            case(
                "positional",
                "%2$s %1$s",
                vec![FixtureArg::Str("world".into()), FixtureArg::Str("hello".into())],
                "hello world",
            ),
            case(
                "star_width",
                "%*d",
                vec![FixtureArg::Int(6), FixtureArg::Int(-7)],
                "    -7",
            ),
            case(
                "zero_padded_hex",
                "%#010x",
                vec![FixtureArg::Uint(0xBEEF)],
                "0x0000beef",
            ),
            case("fixed_float", "%.3f", vec![FixtureArg::Float(2.5)], "2.500"),
            case("null_string", "%s", vec![FixtureArg::NullStr], "(null)"),
            FixtureCase {
                name: "truncated".into(),
                format: "%".into(),
                arguments: vec![],
                expected_output: None,
                expected_error: Some("malformed_directive".into()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set_passes() {
        let outcomes = run_set(&builtin_set());
        for outcome in &outcomes {
            assert!(
                outcome.passed,
                "case {} failed: got {:?}, expected {:?}",
                outcome.name, outcome.got, outcome.expected
            );
        }
    }

    #[test]
    fn test_mismatch_is_reported() {
        let case = FixtureCase {
            name: "wrong".into(),
            format: "%d".into(),
            arguments: vec![FixtureArg::Int(1)],
            expected_output: Some("2".into()),
            expected_error: None,
        };
        let outcome = run_case(&case);
        assert!(!outcome.passed);
        assert_eq!(outcome.got, "1");
        assert_eq!(outcome.expected, "2");
    }
}
