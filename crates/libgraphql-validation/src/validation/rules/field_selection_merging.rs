use crate::document::ByteSliceReference;
use crate::document::Ref;
use crate::loc::Position;
use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::walker::Walker;

/// Fields sharing a response name can be merged into one response entry.
///
/// Within one type they must be written identically. Across the differing
/// type conditions reachable from a selection set only the response shapes
/// must agree, since at most one of the conditions applies to any object.
pub fn field_selection_merging(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    check_all(lookup, walker).into()
}

fn check_all(lookup: &Lookup<'_>, walker: &Walker) -> Result<(), RuleViolation> {
    for set_idx in walker.selection_sets() {
        // Unresolvable types are reported by the field selection rule.
        let Some(type_name) = walker.selection_set_type_name(lookup, *set_idx) else {
            continue;
        };
        let node = walker.node(*set_idx);
        check_same_type_fields(lookup, Some(node.node_ref), type_name, node.position)?;
        check_differing_sets(lookup, Some(node.node_ref), type_name, node.position)?;
    }
    Ok(())
}

fn check_same_type_fields(
    lookup: &Lookup<'_>,
    set: Option<Ref>,
    type_name: ByteSliceReference,
    position: Position,
) -> Result<(), RuleViolation> {
    let fields = lookup.selection_set_collected_fields(set, type_name);
    if fields.has_cycle() {
        return Err(cycle_violation(position));
    }

    let fields = fields.as_slice();
    for (idx, left) in fields.iter().enumerate() {
        if let Some(conflict) = first_conflict(lookup, *left, &fields[idx + 1..]) {
            return Err(conflict_violation(lookup, conflict));
        }
    }
    Ok(())
}

fn check_differing_sets(
    lookup: &Lookup<'_>,
    set: Option<Ref>,
    type_name: ByteSliceReference,
    position: Position,
) -> Result<(), RuleViolation> {
    let differing = lookup.selection_set_differing_selection_sets(set, type_name);
    if differing.has_cycle() {
        return Err(cycle_violation(position));
    }

    for left_idx in 0..differing.len() {
        for right_idx in left_idx + 1..differing.len() {
            let (Some(left), Some(right)) = (differing.get(left_idx), differing.get(right_idx)) else {
                continue;
            };

            if !lookup.bytes_equal(left.type_name, right.type_name) {
                if !lookup.selection_sets_are_of_same_response_shape(left, right) {
                    return Err(RuleViolation::new(
                        RuleName::FieldSelectionMerging,
                        Description::SelectionSetsHaveDifferentResponseShapes,
                        position,
                        Some(right.type_name),
                    ));
                }
                continue;
            }

            let left_fields = lookup.selection_set_collected_fields(left.selection_set, left.type_name);
            let right_fields = lookup.selection_set_collected_fields(right.selection_set, right.type_name);
            if left_fields.has_cycle() || right_fields.has_cycle() {
                return Err(cycle_violation(position));
            }
            for left_field in left_fields.as_slice() {
                if let Some(conflict) = first_conflict(lookup, *left_field, right_fields.as_slice()) {
                    return Err(conflict_violation(lookup, conflict));
                }
            }
        }
    }
    Ok(())
}

/// The first of `others` sharing `field`'s response name without being
/// written identically.
fn first_conflict(lookup: &Lookup<'_>, field: Ref, others: &[Ref]) -> Option<Ref> {
    others.iter()
        .find(|other| {
            lookup.response_names_are_equal(field, **other)
                && !lookup.fields_deep_equal(field, **other)
        })
        .copied()
}

fn conflict_violation(lookup: &Lookup<'_>, field: Ref) -> RuleViolation {
    let field = lookup.field(field);
    RuleViolation::new(
        RuleName::FieldSelectionMerging,
        Description::FieldSelectionsCannotMerge,
        field.position,
        Some(field.response_name()),
    )
}

fn cycle_violation(position: Position) -> RuleViolation {
    RuleViolation::new(
        RuleName::FieldSelectionMerging,
        Description::FragmentSpreadCycle,
        position,
        None,
    )
}
