use ls_rewriter::{generate, generate_with_clock, GenerationConfig, LsError, RuleTable, SteppingClock};
use std::time::Duration;

#[test]
fn test_generate_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("koch.json");
    std::fs::write(
        &path,
        r#"{
            "axiom": "F+F",
            "iterations": 2,
            "timeout_secs": -1.0,
            "rules": [{ "symbol": "F", "replacement": "F+F-F" }]
        }"#,
    )
    .unwrap();

    let config = GenerationConfig::from_json_file(&path).unwrap();
    let g = generate(&config).unwrap();
    assert_eq!(g.output, "F+F-F+F+F-F-F+F-F+F+F-F+F+F-F-F+F-F");
    assert_eq!(g.completed_iterations, 2);
    assert!(!g.timed_out);
}

#[test]
fn test_parsed_rules_feed_config() {
    let rules: RuleTable = "X -> F-[[X]+X]+F[+FX]-X; F -> FF".parse().unwrap();
    let mut config = GenerationConfig::new("X").with_iterations(3).with_timeout_secs(None);
    config.rules = rules.to_specs();
    let g = generate(&config).unwrap();
    assert!(g.output.starts_with("FFFF-[[FF-[[F-[[X]+X]+F[+FX]-X]"));
    assert_eq!(g.output.matches('[').count(), g.output.matches(']').count());
}

#[test]
fn test_duplicate_rules_in_json_last_wins() {
    let config = GenerationConfig::from_json_str(
        r#"{"axiom":"A","iterations":1,"rules":[{"symbol":"A","replacement":"B"},{"symbol":"A","replacement":"C"}]}"#,
    )
    .unwrap();
    assert_eq!(generate(&config).unwrap().output, "C");
}

#[test]
fn test_invalid_config_runs_nothing() {
    let err = GenerationConfig::from_json_str(r#"{"axiom":"A","iterations":-1}"#).unwrap_err();
    assert!(matches!(err, LsError::NegativeIterations(-1)));
}

#[test]
fn test_timed_out_generation_is_complete_prefix_generation() {
    let config = GenerationConfig::new("A")
        .with_rule('A', "AB")
        .with_rule('B', "A")
        .with_iterations(40)
        .with_timeout_secs(Some(0.2));
    let g = generate_with_clock(&config, SteppingClock::new(Duration::from_millis(1))).unwrap();
    assert!(g.timed_out);

    let mut expected = GenerationConfig::new("A")
        .with_rule('A', "AB")
        .with_rule('B', "A")
        .with_timeout_secs(None);
    expected.iterations = g.completed_iterations as i64;
    assert_eq!(g.output, generate(&expected).unwrap().output);
}
