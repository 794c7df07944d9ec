mod directive_tests;
mod field_selection_tests;
mod validator_tests;
mod value_tests;

use crate::Lookup;
use crate::Walker;
use crate::test_utils;
use crate::validation::Description;
use crate::validation::Rule;
use crate::validation::ValidationResult;

/// Runs `rule` over `query` walked against the shared test schema.
fn run_rule(rule: Rule, query: &str) -> ValidationResult {
    let doc = test_utils::build_document(query);
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_executable(&lookup);
    rule(&lookup, &walker)
}

fn assert_valid(rule: Rule, query: &str) {
    let result = run_rule(rule, query);
    assert!(result.is_valid(), "expected valid, got {result:?} for:\n{query}");
}

fn assert_invalid(rule: Rule, query: &str) {
    let result = run_rule(rule, query);
    assert!(!result.is_valid(), "expected invalid for:\n{query}");
}

fn assert_invalid_with(rule: Rule, query: &str, description: Description) {
    match run_rule(rule, query) {
        ValidationResult::Invalid(violation) => assert_eq!(
            violation.description,
            description,
            "unexpected violation for:\n{query}",
        ),
        ValidationResult::Valid => panic!("expected {description} for:\n{query}"),
    }
}
