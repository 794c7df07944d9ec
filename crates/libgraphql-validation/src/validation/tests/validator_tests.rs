use crate::Lookup;
use crate::Walker;
use crate::test_utils;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::ValidationResult;
use crate::validation::Validator;
use crate::validation::rules;
use rayon::prelude::*;

const VALID_QUERY: &str = "
    query dogQuery($atOtherHomes: Boolean) {
        dog {
            ...dogFields
            isHousetrained(atOtherHomes: $atOtherHomes)
        }
    }
    fragment dogFields on Dog { name nickname owner { name } }
";

/// Breaks two rules: `f` is never spread and `$unused` is never used.
const DOUBLY_INVALID_QUERY: &str = "
    query q($unused: Boolean) { dog { name } }
    fragment f on Dog { name }
";

fn validate(validator: &Validator, query: &str) -> ValidationResult {
    let doc = test_utils::build_document(query);
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_executable(&lookup);
    validator.validate(&lookup, &walker)
}

#[test]
fn default_validator_accepts_a_valid_document() {
    let result = validate(&Validator::default(), VALID_QUERY);
    assert!(result.is_valid(), "{result:?}");
}

#[test]
fn validation_stops_at_the_first_failing_rule() {
    let result = validate(&Validator::default(), DOUBLY_INVALID_QUERY);
    let violation = result.violation().expect("expected a violation");
    assert_eq!(violation.rule_name, RuleName::Fragments);
    assert_eq!(violation.description, Description::FragmentDeclaredButNeverUsed);
}

#[test]
fn validate_all_reports_every_failing_rule_in_order() {
    let doc = test_utils::build_document(DOUBLY_INVALID_QUERY);
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_executable(&lookup);

    let violations = Validator::default().validate_all(&lookup, &walker);
    let rule_names: Vec<RuleName> = violations.iter().map(|v| v.rule_name).collect();
    assert_eq!(rule_names, vec![RuleName::Fragments, RuleName::AllVariablesUsed]);

    let fragment_name = violations[0].meta.subject_name_ref.expect("expected a subject name");
    assert_eq!(lookup.str(fragment_name), "f");
}

#[test]
fn rule_order_decides_the_reported_violation() {
    let validator = Validator::new()
        .with_rule(RuleName::AllVariablesUsed, rules::all_variables_used)
        .with_rule(RuleName::Fragments, rules::fragments);
    let result = validate(&validator, DOUBLY_INVALID_QUERY);
    assert_eq!(
        result.violation().map(|violation| violation.rule_name),
        Some(RuleName::AllVariablesUsed),
    );
}

#[test]
fn empty_validator_accepts_anything() {
    assert!(validate(&Validator::new(), DOUBLY_INVALID_QUERY).is_valid());
}

#[test]
fn default_rule_order() {
    let names: Vec<RuleName> = Validator::default().rule_names().collect();
    assert_eq!(names.len(), 19);
    assert_eq!(names.first(), Some(&RuleName::OperationNameUniqueness));
    assert_eq!(names.last(), Some(&RuleName::AllVariablesUsed));
    assert!(!names.contains(&RuleName::DirectiveArgumentsAreConstants));

    let position = |name: RuleName| names.iter().position(|n| *n == name);
    assert!(position(RuleName::Fragments) < position(RuleName::FieldSelections));
    assert!(position(RuleName::ValidArguments) < position(RuleName::Values));
}

#[test]
fn type_system_validator_holds_the_directive_rules() {
    let names: Vec<RuleName> = Validator::type_system().rule_names().collect();
    assert_eq!(names.len(), 6);
    assert_eq!(names.last(), Some(&RuleName::DirectiveArgumentsAreConstants));
}

#[test]
fn violations_display_rule_and_description() {
    let result = validate(&Validator::default(), DOUBLY_INVALID_QUERY);
    let violation = result.violation().expect("expected a violation");
    assert_eq!(
        violation.to_string(),
        "RuleName: Fragments, Description: FragmentDeclaredButNeverUsed",
    );
}

#[test]
fn into_result_carries_the_violation() {
    assert!(validate(&Validator::default(), VALID_QUERY).into_result().is_ok());
    let err = validate(&Validator::default(), DOUBLY_INVALID_QUERY)
        .into_result()
        .expect_err("expected a violation");
    assert_eq!(err.rule_name, RuleName::Fragments);
}

#[test]
fn documents_validate_independently_in_parallel() {
    let queries = [
        VALID_QUERY,
        DOUBLY_INVALID_QUERY,
        "{ dog { name } }",
        "{ dog }",
        "query a { dog { name } } query a { cat { name } }",
    ];
    let validator = Validator::default();

    let results: Vec<Option<RuleName>> = queries.par_iter()
        .map(|query| {
            validate(&validator, query)
                .violation()
                .map(|violation| violation.rule_name)
        })
        .collect();

    assert_eq!(results, vec![
        None,
        Some(RuleName::Fragments),
        None,
        Some(RuleName::FieldSelections),
        Some(RuleName::OperationNameUniqueness),
    ]);
}

#[test]
fn default_validator_accepts_deeply_repeated_fragment_spreads() {
    let mut query = String::from("query q { dog { ...f0 } } ");
    for i in 0..24 {
        query.push_str(&format!("fragment f{i} on Dog {{ ...f{next} ...f{next} }} ", next = i + 1));
    }
    query.push_str("fragment f24 on Dog { name }");

    let result = validate(&Validator::default(), &query);
    assert!(result.is_valid(), "{result:?}");
}
