use crate::validation::Description;
use crate::validation::rules;
use crate::validation::tests::assert_invalid;
use crate::validation::tests::assert_invalid_with;
use crate::validation::tests::assert_valid;

#[test]
fn variable_defaults_are_checked_against_the_argument() {
    assert_valid(rules::values, r#"
        query goodComplexDefaultValue($search: ComplexInput = { name: "Fido" }) {
            findDog(complex: $search) { name }
        }
    "#);
    assert_valid(rules::values, r#"
        query goodComplexDefaultValue($search: ComplexInput = { name: "Fido" }) {
            ...queryFragment
        }
        fragment queryFragment on Query { findDog(complex: $search) { name } }
    "#);
    assert_invalid_with(
        rules::values,
        r#"query badComplexDefaultValue($search: ComplexInput = { name: 123 }) {
            findDog(complex: $search) { name }
        }"#,
        Description::ArgumentValueInvalid,
    );
}

#[test]
fn operations_without_a_root_type_have_no_argument_definitions() {
    for operation_type in ["mutation", "subscription"] {
        assert_invalid_with(
            rules::values,
            &format!(r#"{operation_type} goodComplexDefaultValue($search: ComplexInput = {{ name: "Fido" }}) {{
                findDog(complex: $search) {{ name }}
            }}"#),
            Description::ArgumentsDefinitionNotFound,
        );
    }
}

#[test]
fn scalar_literals_coerce_to_their_types() {
    for field in [
        "booleanArgField(booleanArg: true)",
        "floatArgField(floatArg: 123)",
        "floatArgField(floatArg: 1.23)",
        "intArgField(intArg: -4)",
    ] {
        assert_valid(rules::values, &format!("{{ arguments {{ {field} }} }}"));
    }
    for field in [
        "intArgField(intArg: \"123\")",
        "intArgField(intArg: 1.5)",
        "booleanArgField(booleanArg: 1)",
        "booleanArgField(booleanArg: TRUE)",
    ] {
        assert_invalid_with(
            rules::values,
            &format!("{{ arguments {{ {field} }} }}"),
            Description::ArgumentValueInvalid,
        );
    }
}

#[test]
fn enum_arguments_accept_only_declared_values() {
    assert_valid(rules::values, "{ dog { doesKnowCommand(dogCommand: SIT) } }");
    for value in ["MEOW", "[true]", "{foo: \"bar\"}", "\"SIT\""] {
        assert_invalid(
            rules::values,
            &format!("{{ dog {{ doesKnowCommand(dogCommand: {value}) }} }}"),
        );
    }
}

#[test]
fn values_in_fragments_are_checked() {
    assert_invalid(rules::values, r#"
        { arguments { ...stringIntoInt } }
        fragment stringIntoInt on ValidArguments { intArg: intArgField(intArg: "123") }
    "#);
    assert_invalid(rules::values, r#"
        query goodComplexDefaultValue { ...viaFragment }
        fragment viaFragment on Query { findDogNonOptional(complex: { name: 123 }) { name } }
    "#);
    assert_valid(rules::values, r#"
        query goodComplexDefaultValue { ...viaFragment }
        fragment viaFragment on Query { findDogNonOptional(complex: { name: "Goofy" }) { name } }
    "#);
}

#[test]
fn input_object_fields_must_be_declared() {
    assert_valid(rules::values, r#"{ findDog(complex: { name: "Fido" }) { name } }"#);
    assert_valid(rules::values, r#"{ findDog(complex: { owner: "Jane", name: "Fido" }) { name } }"#);
    assert_invalid_with(
        rules::values,
        r#"{ findDog(complex: { favoriteCookieFlavor: "Bacon" }) { name } }"#,
        Description::ArgumentValueInvalid,
    );
}

#[test]
fn required_input_object_fields_must_be_supplied() {
    assert_valid(rules::values, r#"
        query goodComplexDefaultValue($search: ComplexNonOptionalInput = { name: "123" }) {
            findDogNonOptional(complex: $search) { name }
        }
    "#);
    assert_valid(rules::values, r#"{ findDogNonOptional(complex: { name: "Goofy" }) { name } }"#);
    assert_invalid(rules::values, r#"
        query badComplexDefaultValue($search: ComplexNonOptionalInput = { name: null }) {
            findDogNonOptional(complex: $search) { name }
        }
    "#);
    assert_invalid(rules::values, r#"{ findDogNonOptional(complex: { owner: "Jane" }) { name } }"#);
}

#[test]
fn variables_must_match_the_argument_type() {
    for query in [
        "query intCannotGoIntoBoolean($intArg: Int) {
            arguments { booleanArgField(booleanArg: $intArg) }
        }",
        "query booleanListCannotGoIntoBoolean($booleanListArg: [Boolean]) {
            arguments { booleanArgField(booleanArg: $booleanListArg) }
        }",
        "query booleanArgQuery($booleanArg: Boolean) {
            arguments { nonNullBooleanArgField(nonNullBooleanArg: $booleanArg) }
        }",
        "query nullableListToNonNullList($booleanList: [Boolean]) {
            arguments { booleanListArgField(booleanListArg: $booleanList) }
        }",
    ] {
        assert_invalid_with(rules::values, query, Description::ArgumentValueInvalid);
    }
}

#[test]
fn undefined_variables_are_invalid_values() {
    assert_invalid_with(
        rules::values,
        "{ arguments { booleanArgField(booleanArg: $undefined) } }",
        Description::ArgumentValueInvalid,
    );
}

#[test]
fn non_null_variables_flow_into_nullable_positions() {
    assert_valid(rules::values, "
        query nonNullListToList($nonNullBooleanList: [Boolean]!) {
            arguments { booleanListArgField(booleanListArg: $nonNullBooleanList) }
        }
    ");
    assert_valid(rules::values, "
        query nonNullToNullable($flag: Boolean!) {
            arguments { booleanArgField(booleanArg: $flag) }
        }
    ");
}

#[test]
fn list_literals_check_every_item() {
    assert_valid(
        rules::values,
        "{ arguments { booleanListArgField(booleanListArg: [true, false, null]) } }",
    );
    for list in ["[true, false, \"123\"]", "[true, false, 123]", "true"] {
        assert_invalid(
            rules::values,
            &format!("{{ arguments {{ booleanListArgField(booleanListArg: {list}) }} }}"),
        );
    }
    assert_invalid(rules::values, "{ booleanList(booleanListArg: [true, null]) }");
}

#[test]
fn defaults_let_nullable_variables_fill_non_null_positions() {
    assert_valid(rules::values, "
        query booleanArgQueryWithDefault($booleanArg: Boolean) {
            arguments { optionalNonNullBooleanArgField(optionalBooleanArg: $booleanArg) }
        }
    ");
    assert_valid(rules::values, "
        query booleanArgQueryWithDefault($booleanArg: Boolean = true) {
            arguments { nonNullBooleanArgField(nonNullBooleanArg: $booleanArg) }
        }
    ");
}

#[test]
fn arguments_of_unknown_fields_have_no_definition() {
    assert_invalid_with(
        rules::values,
        "query listToNonNullList($booleanList: [Boolean]) {
            arguments { nonNullBooleanListField(nonNullBooleanListArg: $booleanList) }
        }",
        Description::ArgumentsDefinitionNotFound,
    );
}

#[test]
fn values_outside_any_operation_must_be_constant() {
    assert_valid(rules::values, "fragment f on Dog { isHousetrained(atOtherHomes: true) }");
    assert_invalid(rules::values, "fragment f on Dog { isHousetrained(atOtherHomes: $flag) }");
}
