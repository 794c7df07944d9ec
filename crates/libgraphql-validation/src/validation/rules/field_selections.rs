use crate::document::ByteSliceReference;
use crate::document::Ref;
use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::walker::Walker;

/// Every selected field exists on the type it is selected from. Leaf fields
/// have no selection set and all other fields have one.
///
/// Operations are checked from their root type and fragments from their
/// type condition. Spreads are not followed since each fragment is checked
/// on its own.
pub fn field_selections(lookup: &Lookup<'_>, _walker: &Walker) -> ValidationResult {
    check_all(lookup).into()
}

fn check_all(lookup: &Lookup<'_>) -> Result<(), RuleViolation> {
    for operation in lookup.operation_definitions() {
        let Some(root_type_name) = lookup.root_operation_type_name(operation.operation_type) else {
            return Err(RuleViolation::new(
                RuleName::FieldSelections,
                Description::OperationRootTypeNotDefined,
                operation.position,
                operation.name,
            ));
        };
        check_selection_set(lookup, operation.selection_set, root_type_name)?;
    }

    for fragment in lookup.fragment_definitions() {
        check_selection_set(
            lookup,
            fragment.selection_set,
            lookup.fragment_type_condition(fragment),
        )?;
    }

    Ok(())
}

fn check_selection_set(
    lookup: &Lookup<'_>,
    set: Option<Ref>,
    type_name: ByteSliceReference,
) -> Result<(), RuleViolation> {
    let selections = lookup.selection_set(set);

    for field_ref in &selections.fields {
        let field = lookup.field(*field_ref);
        let violation = |description: Description| RuleViolation::new(
            RuleName::FieldSelections,
            description,
            field.position,
            Some(field.name),
        );

        if lookup.name_is(field.name, "__typename") {
            if field.selection_set.is_some() {
                return Err(violation(Description::LeafFieldMustNotHaveSelections));
            }
            continue;
        }

        let Some(field_type) = lookup.field_type(type_name, field.name) else {
            return Err(violation(Description::FieldNotDefinedOnType));
        };
        let field_type_name = lookup.type_name(field_type);

        if lookup.is_leaf_type(field_type_name) {
            if field.selection_set.is_some() {
                return Err(violation(Description::LeafFieldMustNotHaveSelections));
            }
            continue;
        }
        if field.selection_set.is_none() {
            return Err(violation(Description::CompositeFieldMustHaveSelections));
        }
        check_selection_set(lookup, field.selection_set, field_type_name)?;
    }

    for inline_ref in &selections.inline_fragments {
        let inline = lookup.inline_fragment(*inline_ref);
        let inline_type_name = inline.type_condition
            .map_or(type_name, |cond| lookup.type_name(cond));
        check_selection_set(lookup, inline.selection_set, inline_type_name)?;
    }

    Ok(())
}
