use crate::validation::Description;
use crate::validation::rules;
use crate::validation::tests::assert_invalid;
use crate::validation::tests::assert_invalid_with;
use crate::validation::tests::assert_valid;

#[test]
fn aliased_undefined_field_in_fragment_is_invalid() {
    assert_invalid_with(
        rules::field_selections,
        "{ dog { ...aliasedLyingFieldTargetNotDefined } }
         fragment aliasedLyingFieldTargetNotDefined on Dog { barkVolume: kawVolume }",
        Description::FieldNotDefinedOnType,
    );
}

#[test]
fn aliased_undefined_field_in_operation_is_invalid() {
    assert_invalid(rules::field_selections, "{ dog { barkVolume: kawVolume } }");
}

#[test]
fn interface_fields_are_selectable_on_the_interface() {
    assert_valid(rules::field_selections, "
        { dog { ...interfaceFieldSelection } }
        fragment interfaceFieldSelection on Pet { name }
    ");
}

#[test]
fn implementor_only_field_on_interface_is_invalid() {
    assert_invalid(rules::field_selections, "
        { dog { ...definedOnImplementorsButNotInterface } }
        fragment definedOnImplementorsButNotInterface on Pet { nickname }
    ");
}

#[test]
fn union_selections_go_through_typename_and_fragments() {
    assert_valid(rules::field_selections, "
        fragment inDirectFieldSelectionOnUnion on CatOrDog {
            __typename
            ... on Pet { name }
            ... on Dog { name }
        }
    ");
}

#[test]
fn undefined_field_in_typed_inline_fragment_is_invalid() {
    assert_invalid(rules::field_selections, "
        fragment inDirectFieldSelectionOnUnion on CatOrDog {
            __typename
            ... on Pet { name }
            ... on Dog { x }
        }
    ");
}

#[test]
fn untyped_inline_fragment_selects_from_the_enclosing_type() {
    assert_invalid(rules::field_selections, "
        fragment inDirectFieldSelectionOnUnion on CatOrDog {
            __typename
            ... on Pet { name }
            ... { x }
        }
    ");
}

#[test]
fn direct_field_selection_on_union_is_invalid() {
    assert_invalid(rules::field_selections, "
        fragment directFieldSelectionOnUnion on CatOrDog { name barkVolume }
    ");
}

#[test]
fn scalar_field_selection_is_valid() {
    assert_valid(rules::field_selections, "fragment scalarSelection on Dog { barkVolume }");
}

#[test]
fn selections_on_leaf_fields_are_invalid() {
    assert_invalid_with(
        rules::field_selections,
        "fragment scalarSelectionsNotAllowedOnInt on Dog { barkVolume { sinceWhen } }",
        Description::LeafFieldMustNotHaveSelections,
    );
    assert_invalid_with(
        rules::field_selections,
        "fragment directFieldSelectionOnUnion on Cat { name { name } }",
        Description::LeafFieldMustNotHaveSelections,
    );
}

#[test]
fn composite_fields_without_selections_are_invalid() {
    for query in [
        "query directQueryOnObjectWithoutSubFields { human }",
        "query directQueryOnInterfaceWithoutSubFields { pet }",
        "query directQueryOnUnionWithoutSubFields { catOrDog }",
    ] {
        assert_invalid_with(
            rules::field_selections,
            query,
            Description::CompositeFieldMustHaveSelections,
        );
    }
}

#[test]
fn operations_without_a_root_type_are_invalid() {
    for query in [
        "mutation directQueryOnUnionWithoutSubFields { catOrDog }",
        "subscription directQueryOnUnionWithoutSubFields { catOrDog }",
    ] {
        assert_invalid_with(
            rules::field_selections,
            query,
            Description::OperationRootTypeNotDefined,
        );
    }
}
