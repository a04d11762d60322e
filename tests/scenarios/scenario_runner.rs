use super::scenario_loader::{
    Expected, Scenario, ScenarioEntry, ScenarioFailure, ScenarioResult, expected_map,
    to_query_value,
};
use std::collections::BTreeMap;
/// Scenario runner
///
/// Runs loaded scenarios against the crate's free functions
use tiny_query_string::{
    Lookup, QueryMap, Result, get_all, get_many, get_one, remove_all, remove_many, remove_one,
    set_flags, set_many, set_one,
};

/// Run scenarios and collect results
pub fn run_scenarios(entries: Vec<ScenarioEntry>) -> ScenarioResult {
    let mut result = ScenarioResult::default();
    let mut index = 0;

    for entry in entries {
        let ScenarioEntry::Case(scenario) = entry else {
            continue;
        };
        index += 1;

        let op = scenario.op();
        let (expected, actual) = evaluate(&scenario);
        if expected == actual {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(ScenarioFailure {
                index,
                op,
                expected,
                actual,
            });
        }
    }

    result
}

/// Debug renderings of (expected, actual) for one scenario
fn evaluate(scenario: &Scenario) -> (String, String) {
    match scenario {
        Scenario::GetOne { name, text, expect } => (
            format!("{:?}", Ok::<_, ()>(Lookup::from(expect))),
            format!("{:?}", get_one(name, text).map_err(|_| ())),
        ),
        Scenario::GetMany {
            names,
            text,
            expect,
        } => compare_maps(expect, get_many(names, text)),
        Scenario::GetAll { text, expect } => compare_maps(expect, get_all(text)),
        Scenario::SetOne {
            name,
            value,
            text,
            expect,
        } => render(expect, set_one(name, to_query_value(value), text)),
        Scenario::SetMany {
            entries,
            text,
            expect,
        } => render(
            expect,
            set_many(
                entries
                    .iter()
                    .map(|(name, value)| (name, to_query_value(value))),
                text,
            ),
        ),
        Scenario::SetFlags {
            names,
            text,
            expect,
        } => render(expect, set_flags(names, text)),
        Scenario::RemoveOne { name, text, expect } => render(expect, remove_one(name, text)),
        Scenario::RemoveMany {
            names,
            text,
            expect,
        } => render(expect, remove_many(names, text)),
        Scenario::RemoveAll { text, expect } => (expect.clone(), remove_all(text)),
    }
}

fn render(expect: &str, actual: Result<String>) -> (String, String) {
    (
        expect.to_string(),
        actual.unwrap_or_else(|err| format!("error: {err}")),
    )
}

fn compare_maps(
    expect: &BTreeMap<String, Expected>,
    actual: Result<QueryMap>,
) -> (String, String) {
    let expected = expected_map(expect);
    match actual {
        // maps compare without regard to order
        Ok(actual) if actual == expected => (format!("{expected:?}"), format!("{expected:?}")),
        Ok(actual) => (format!("{expected:?}"), format!("{actual:?}")),
        Err(err) => (format!("{expected:?}"), format!("error: {err}")),
    }
}
