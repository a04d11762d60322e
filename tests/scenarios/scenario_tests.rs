use super::scenario_loader::load_scenarios;
use super::scenario_runner::run_scenarios;

const QUERY_SCENARIOS: &str = include_str!("data/query_scenarios.json");
const EDGE_SCENARIOS: &str = include_str!("data/edge_scenarios.json");

#[test]
fn test_query_scenarios() {
    let result = run_scenarios(load_scenarios(QUERY_SCENARIOS));
    assert!(result.passed > 0);
    assert_eq!(result.failed, 0, "{}", result.summary());
}

#[test]
fn test_edge_scenarios() {
    let result = run_scenarios(load_scenarios(EDGE_SCENARIOS));
    assert!(result.passed > 0);
    assert_eq!(result.failed, 0, "{}", result.summary());
}
