use crate::Document;
use crate::Lookup;
use crate::Walker;
use crate::test_utils;
use crate::validation::Description;
use crate::validation::Rule;
use crate::validation::RuleName;
use crate::validation::ValidationResult;
use crate::validation::Validator;
use crate::validation::rules;
use crate::validation::tests::assert_invalid;
use crate::validation::tests::assert_invalid_with;
use crate::validation::tests::assert_valid;

const TAGGED_SCHEMA: &str = "
    directive @tag(name: String!) repeatable on FIELD | FIELD_DEFINITION | OBJECT
    directive @once on FIELD
";

/// Runs `rule` over a type-system walk of `schema` on its own.
fn run_type_system(rule: Rule, schema: &str) -> ValidationResult {
    let mut doc = Document::new();
    doc.parse_type_system_definition(schema).expect("schema parse error");
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_type_system_definition(&lookup);
    rule(&lookup, &walker)
}

/// Runs `rule` over `query` against the shared schema extended with
/// `@tag` and `@once`.
fn run_tagged(rule: Rule, query: &str) -> ValidationResult {
    let schema = format!("{}{TAGGED_SCHEMA}", test_utils::TEST_SCHEMA);
    let doc = test_utils::build_document_with_schema(&schema, query);
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_executable(&lookup);
    rule(&lookup, &walker)
}

fn description_of(result: ValidationResult) -> Option<Description> {
    result.violation().map(|violation| violation.description)
}

#[test]
fn defined_directives_are_valid() {
    assert_valid(rules::directives_are_defined, "
        query definedDirective {
            arguments { booleanArgField(booleanArg: true) @skip(if: true) }
        }
    ");
}

#[test]
fn undefined_directives_are_invalid() {
    assert_invalid_with(
        rules::directives_are_defined,
        "query undefinedDirective {
            arguments { booleanArgField(booleanArg: true) @noSkip(if: true) }
        }",
        Description::DirectiveNotDefined,
    );
    assert_invalid_with(
        rules::directives_are_defined,
        "query undefinedDirective { arguments { ...viaFragment } }
         fragment viaFragment on ValidArguments {
             booleanArgField(booleanArg: true) @noSkip(if: true)
         }",
        Description::DirectiveNotDefined,
    );
}

#[test]
fn directives_at_declared_locations_are_valid() {
    for query in [
        "query { dog @skip(if: true) { name } }",
        "{ ... @inline { dog { name } } }",
        "{ ...frag @spread } fragment frag on Query { dog { name } }",
        "{ ...frag } fragment frag on Query @fragmentDefinition { dog { name } }",
    ] {
        assert_valid(rules::directives_are_in_valid_locations, query);
    }
}

#[test]
fn directives_at_other_locations_are_invalid() {
    for query in [
        "query @skip(if: true) { dog { name } }",
        "{ ... { dog @inline { name } } }",
        "{ ... { dog @spread { name } } }",
        "{ ... { dog @fragmentDefinition { name } } }",
    ] {
        assert_invalid_with(
            rules::directives_are_in_valid_locations,
            query,
            Description::DirectiveLocationNotAllowed,
        );
    }
}

#[test]
fn undefined_directives_have_no_valid_location() {
    assert_invalid_with(
        rules::directives_are_in_valid_locations,
        "query @noSkip(if: true) { dog { name } }",
        Description::DirectiveNotDefined,
    );
}

#[test]
fn operation_directives_match_the_operation_type() {
    let directives = ["onQuery", "onMutation", "onSubscription"];
    for (operation_idx, operation_type) in ["query", "mutation", "subscription"].iter().enumerate() {
        for (directive_idx, directive) in directives.iter().enumerate() {
            let query = format!("{operation_type} @{directive} {{ dog {{ name }} }}");
            let result = crate::validation::tests::run_rule(
                rules::directives_are_in_valid_locations,
                &query,
            );
            assert_eq!(
                result.is_valid(),
                operation_idx == directive_idx,
                "unexpected result for {query}",
            );
        }
    }
}

#[test]
fn type_system_directives_are_checked_at_their_locations() {
    let schema = format!("{TAGGED_SCHEMA} type Query @tag(name: \"q\") {{ a: Int @tag(name: \"a\") }}");
    assert!(run_type_system(rules::directives_are_in_valid_locations, &schema).is_valid());

    let schema = format!("{TAGGED_SCHEMA} type Query {{ a(x: Int @tag(name: \"x\")): Int }}");
    assert_eq!(
        description_of(run_type_system(rules::directives_are_in_valid_locations, &schema)),
        Some(Description::DirectiveLocationNotAllowed),
    );
}

#[test]
fn repeated_directive_at_one_location_is_invalid() {
    assert_invalid_with(
        rules::directives_are_unique_per_location,
        "query ($foo: Boolean = true, $bar: Boolean = false) {
            field @skip(if: $foo) @skip(if: $bar)
        }",
        Description::DirectiveMustBeUniquePerLocation,
    );
}

#[test]
fn same_directive_at_different_locations_is_valid() {
    assert_valid(rules::directives_are_unique_per_location, "
        query ($foo: Boolean = true, $bar: Boolean = false) {
            field @skip(if: $foo) { subfieldA }
            field @skip(if: $bar) { subfieldB }
        }
    ");
}

#[test]
fn repeatable_directives_may_repeat() {
    let result = run_tagged(
        rules::directives_are_unique_per_location,
        "{ dog @tag(name: \"a\") @tag(name: \"b\") { name } }",
    );
    assert!(result.is_valid(), "{result:?}");

    let result = run_tagged(rules::directives_are_unique_per_location, "{ dog @once @once { name } }");
    assert_eq!(description_of(result), Some(Description::DirectiveMustBeUniquePerLocation));

    // Without a definition a directive is treated as non-repeatable.
    assert_invalid(rules::directives_are_unique_per_location, "{ dog @unknown @unknown { name } }");
}

#[test]
fn missing_required_directive_argument_is_invalid() {
    assert_invalid_with(
        rules::directives_have_required_arguments,
        "{ dog @skip { name } }",
        Description::DirectiveRequiredArgumentMissing,
    );
    assert_invalid_with(
        rules::directives_have_required_arguments,
        "{ dog @include(if: \"yes\") { name } }",
        Description::DirectiveArgumentValueInvalid,
    );
    assert_invalid_with(
        rules::directives_have_required_arguments,
        "query q($flag: Boolean) { dog @include(if: $flag) { name } }",
        Description::DirectiveArgumentValueInvalid,
    );
}

#[test]
fn supplied_required_directive_arguments_are_valid() {
    assert_valid(rules::directives_have_required_arguments, "
        query q($flag: Boolean!) {
            dog @include(if: $flag) { name }
            cat @skip(if: false) { name }
            pet @noSkip { name }
        }
    ");
}

#[test]
fn undeclared_directive_arguments_are_invalid() {
    assert_invalid_with(
        rules::directive_arguments_are_defined,
        "{ dog @skip(unless: true) { name } }",
        Description::DirectiveArgumentNotDefined,
    );
    assert_invalid_with(
        rules::directive_arguments_are_defined,
        "{ dog @noSkip(if: true) { name } }",
        Description::DirectiveArgumentNotDefined,
    );
    assert_invalid_with(
        rules::directive_arguments_are_defined,
        "{ dog @skip(if: NOPE) { name } }",
        Description::DirectiveArgumentValueInvalid,
    );
}

#[test]
fn declared_directive_arguments_are_valid() {
    assert_valid(rules::directive_arguments_are_defined, "
        query q($flag: Boolean!) { dog @skip(if: $flag) { name } cat @inline { name } }
    ");
    let result = run_tagged(rules::directive_arguments_are_defined, "{ dog @tag(name: \"a\") { name } }");
    assert!(result.is_valid(), "{result:?}");
}

#[test]
fn type_system_directive_arguments_must_be_constant() {
    let schema = format!("{TAGGED_SCHEMA} type Query {{ a: Int @tag(name: $name) }}");
    assert_eq!(
        description_of(run_type_system(rules::directive_arguments_are_constants, &schema)),
        Some(Description::DirectiveArgumentMustBeConstant),
    );

    let schema = format!("{TAGGED_SCHEMA} type Query {{ a: Int @tag(name: \"a\") }}");
    assert!(run_type_system(rules::directive_arguments_are_constants, &schema).is_valid());
}

#[test]
fn type_system_validator_reports_the_first_directive_failure() {
    let schema = format!("{TAGGED_SCHEMA} type Query @tag(name: \"q\") {{ a: Int @once }}");
    let mut doc = Document::new();
    doc.parse_type_system_definition(&schema).expect("schema parse error");
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_type_system_definition(&lookup);

    let result = Validator::type_system().validate(&lookup, &walker);
    let violation = result.violation().expect("expected a violation");
    assert_eq!(violation.rule_name, RuleName::DirectivesAreInValidLocations);
}
