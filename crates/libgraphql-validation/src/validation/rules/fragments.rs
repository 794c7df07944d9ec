use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::walker::Walker;

/// Fragment definitions and the places they are used:
///
/// * fragment names are unique;
/// * fragments and inline fragments are conditioned on composite types;
/// * every fragment is spread somewhere;
/// * every spread names a defined fragment;
/// * no fragment spreads itself, directly or through other fragments;
/// * every fragment applied in a selection set can match the set's type.
pub fn fragments(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    check_all(lookup, walker).into()
}

fn check_all(lookup: &Lookup<'_>, walker: &Walker) -> Result<(), RuleViolation> {
    for (idx, fragment) in lookup.fragment_definitions().iter().enumerate() {
        let violation = |description: Description| RuleViolation::new(
            RuleName::Fragments,
            description,
            fragment.position,
            Some(fragment.name),
        );
        if !lookup.is_fragment_name_unique(idx) {
            return Err(violation(Description::FragmentNameMustBeUnique));
        }
        if !lookup.is_composite_type(lookup.fragment_type_condition(fragment)) {
            return Err(violation(Description::FragmentTypeConditionMustBeComposite));
        }
        if !lookup.is_fragment_used(fragment.name) {
            return Err(violation(Description::FragmentDeclaredButNeverUsed));
        }
    }

    for inline_idx in walker.inline_fragments() {
        let inline = lookup.inline_fragment(walker.node(*inline_idx).node_ref);
        if let Some(cond) = inline.type_condition
            && !lookup.is_composite_type(lookup.type_name(cond)) {
            return Err(RuleViolation::new(
                RuleName::Fragments,
                Description::FragmentTypeConditionMustBeComposite,
                inline.position,
                Some(lookup.type_name(cond)),
            ));
        }
    }

    for spread in lookup.fragment_spreads() {
        if lookup.fragment_definition_by_name(spread.fragment_name).is_none() {
            return Err(RuleViolation::new(
                RuleName::Fragments,
                Description::FragmentSpreadTargetNotDefined,
                spread.position,
                Some(spread.fragment_name),
            ));
        }
    }

    for (idx, fragment) in lookup.fragment_definitions().iter().enumerate() {
        if lookup.fragment_forms_cycle(idx) {
            return Err(RuleViolation::new(
                RuleName::Fragments,
                Description::FragmentSpreadCycle,
                fragment.position,
                Some(fragment.name),
            ));
        }
    }

    for set_idx in walker.selection_sets() {
        let Some(type_name) = walker.selection_set_type_name(lookup, *set_idx) else {
            continue;
        };
        let node = walker.node(*set_idx);
        if !lookup.fragment_selections_are_possible(type_name, Some(node.node_ref)) {
            return Err(RuleViolation::new(
                RuleName::Fragments,
                Description::FragmentSpreadNotPossible,
                node.position,
                Some(type_name),
            ));
        }
    }

    Ok(())
}
