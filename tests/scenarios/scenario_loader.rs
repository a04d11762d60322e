/// Scenario loader
///
/// Scenarios are JSON arrays mixing comment strings and operation objects.
/// Each object names its operation in `op` and carries the text to operate on
/// plus the expected outcome.
use serde::Deserialize;
use std::collections::BTreeMap;
use tiny_query_string::{Lookup, QueryMap, QueryValue};

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ScenarioEntry {
    Case(Scenario),
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Scenario {
    GetOne {
        name: String,
        text: String,
        expect: Expected,
    },
    GetMany {
        names: Vec<String>,
        text: String,
        expect: BTreeMap<String, Expected>,
    },
    GetAll {
        text: String,
        expect: BTreeMap<String, Expected>,
    },
    SetOne {
        name: String,
        #[serde(default)]
        value: serde_json::Value,
        text: String,
        expect: String,
    },
    SetMany {
        entries: Vec<(String, serde_json::Value)>,
        text: String,
        expect: String,
    },
    SetFlags {
        names: Vec<String>,
        text: String,
        expect: String,
    },
    RemoveOne {
        name: String,
        text: String,
        expect: String,
    },
    RemoveMany {
        names: Vec<String>,
        text: String,
        expect: String,
    },
    RemoveAll {
        text: String,
        expect: String,
    },
}

impl Scenario {
    pub fn op(&self) -> &'static str {
        match self {
            Self::GetOne { .. } => "get_one",
            Self::GetMany { .. } => "get_many",
            Self::GetAll { .. } => "get_all",
            Self::SetOne { .. } => "set_one",
            Self::SetMany { .. } => "set_many",
            Self::SetFlags { .. } => "set_flags",
            Self::RemoveOne { .. } => "remove_one",
            Self::RemoveMany { .. } => "remove_many",
            Self::RemoveAll { .. } => "remove_all",
        }
    }
}

/// `false`, `true` or a decoded value, as written in the fixtures
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Expected {
    Present(bool),
    Value(String),
}

impl From<&Expected> for Lookup {
    fn from(expected: &Expected) -> Self {
        match expected {
            Expected::Present(false) => Lookup::Absent,
            Expected::Present(true) => Lookup::Flag,
            Expected::Value(value) => Lookup::Value(value.clone()),
        }
    }
}

pub fn expected_map(expect: &BTreeMap<String, Expected>) -> QueryMap {
    expect
        .iter()
        .map(|(name, expected)| (name, Lookup::from(expected)))
        .collect()
}

/// JSON scalars map onto write values the same way Rust values do
pub fn to_query_value(value: &serde_json::Value) -> QueryValue {
    match value {
        serde_json::Value::String(text) => QueryValue::from(text.as_str()),
        serde_json::Value::Number(number) => number.as_i64().map_or_else(
            || QueryValue::from(number.as_f64().unwrap_or(f64::NAN)),
            QueryValue::from,
        ),
        _ => QueryValue::Flag,
    }
}

pub fn load_scenarios(json: &str) -> Vec<ScenarioEntry> {
    serde_json::from_str(json).unwrap_or_else(|err| panic!("invalid scenario file: {err}"))
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<ScenarioFailure>,
}

#[derive(Debug, Clone)]
pub struct ScenarioFailure {
    pub index: usize,
    pub op: &'static str,
    pub expected: String,
    pub actual: String,
}

impl ScenarioResult {
    pub fn summary(&self) -> String {
        let mut summary = format!("Passed: {}, Failed: {}", self.passed, self.failed);
        for failure in &self.failures {
            summary.push_str(&format!(
                "\n  #{} {}: expected {}, got {}",
                failure.index, failure.op, failure.expected, failure.actual
            ));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mixed_entries() {
        let entries = load_scenarios(
            r#"["a comment", {"op": "remove_all", "text": "/?a", "expect": "/"}]"#,
        );
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], ScenarioEntry::Comment(_)));
        assert!(matches!(
            entries[1],
            ScenarioEntry::Case(Scenario::RemoveAll { .. })
        ));
    }

    #[test]
    fn test_to_query_value() {
        assert_eq!(to_query_value(&serde_json::json!(0)), QueryValue::from(0));
        assert_eq!(to_query_value(&serde_json::json!(1.5)), QueryValue::from(1.5));
        assert_eq!(to_query_value(&serde_json::json!(null)), QueryValue::Flag);
        assert_eq!(to_query_value(&serde_json::json!(true)), QueryValue::Flag);
        assert_eq!(to_query_value(&serde_json::json!("")), QueryValue::Flag);
    }
}
