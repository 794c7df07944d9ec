use crate::document::OperationType;
use crate::document::Ref;
use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::ValidationResult;
use crate::walker::Walker;
use smallvec::SmallVec;

/// No two operations share a name. Reports the first of the pair.
pub fn operation_name_uniqueness(lookup: &Lookup<'_>, _walker: &Walker) -> ValidationResult {
    let operations = lookup.operation_definitions();
    for (idx, operation) in operations.iter().enumerate() {
        let Some(name) = operation.name else {
            continue;
        };
        let duplicated = operations[idx + 1..].iter()
            .any(|other| other.name.is_some_and(|other_name| lookup.bytes_equal(name, other_name)));
        if duplicated {
            return ValidationResult::invalid(
                RuleName::OperationNameUniqueness,
                Description::OperationNameMustBeUnique,
                operation.position,
                Some(name),
            );
        }
    }
    ValidationResult::Valid
}

/// An anonymous operation must be the only operation in its document.
pub fn lone_anonymous_operation(lookup: &Lookup<'_>, _walker: &Walker) -> ValidationResult {
    let operations = lookup.operation_definitions();
    if operations.len() <= 1 {
        return ValidationResult::Valid;
    }
    match operations.iter().find(|operation| operation.name.is_none()) {
        Some(anonymous) => ValidationResult::invalid(
            RuleName::LoneAnonymousOperation,
            Description::OnlyOneAnonymousOperationAllowed,
            anonymous.position,
            None,
        ),
        None => ValidationResult::Valid,
    }
}

/// A subscription selects exactly one root field, counting the fields of
/// every fragment it spreads at the root.
pub fn subscription_single_root_field(lookup: &Lookup<'_>, _walker: &Walker) -> ValidationResult {
    for operation in lookup.operation_definitions() {
        if operation.operation_type != OperationType::Subscription {
            continue;
        }
        let mut path = SmallVec::new();
        let mut expanded = SmallVec::new();
        let description = match count_root_fields(
            lookup,
            operation.selection_set,
            &mut path,
            &mut expanded,
        ) {
            None => Description::FragmentSpreadCycle,
            Some(count) if count > 1 => Description::SubscriptionMustHaveOneRootField,
            Some(_) => continue,
        };
        return ValidationResult::invalid(
            RuleName::SubscriptionSingleRootField,
            description,
            operation.position,
            operation.name,
        );
    }
    ValidationResult::Valid
}

/// `None` when the fragments spread at the root form a cycle.
fn count_root_fields(
    lookup: &Lookup<'_>,
    set: Option<Ref>,
    path: &mut SmallVec<[Ref; 8]>,
    expanded: &mut SmallVec<[Ref; 8]>,
) -> Option<usize> {
    let set = lookup.selection_set(set);
    let mut count = set.fields.len();

    for inline_ref in &set.inline_fragments {
        count += count_root_fields(lookup, lookup.inline_fragment(*inline_ref).selection_set, path, expanded)?;
    }

    for spread_ref in &set.fragment_spreads {
        let spread = lookup.fragment_spread(*spread_ref);
        let Some((fragment_ref, fragment)) = lookup.fragment_definition_by_name(spread.fragment_name) else {
            continue;
        };
        if path.contains(&fragment_ref) {
            return None;
        }
        if expanded.contains(&fragment_ref) {
            continue;
        }
        expanded.push(fragment_ref);
        path.push(fragment_ref);
        count += count_root_fields(lookup, fragment.selection_set, path, expanded)?;
        path.pop();
    }

    Some(count)
}
