use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::validation::rules::is_required;
use crate::validation::rules::value_is_valid_in_scopes;
use crate::validation::rules::variable_scopes;
use crate::walker::Walker;

/// Every applied directive has a definition.
pub fn directives_are_defined(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    for directive_idx in walker.directives() {
        let directive = lookup.directive(walker.node(*directive_idx).node_ref);
        if lookup.directive_definition_by_name(directive.name).is_none() {
            return ValidationResult::invalid(
                RuleName::DirectivesAreDefined,
                Description::DirectiveNotDefined,
                directive.position,
                Some(directive.name),
            );
        }
    }
    ValidationResult::Valid
}

/// Every directive is applied at one of the locations its definition
/// lists.
pub fn directives_are_in_valid_locations(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    for directive_idx in walker.directives() {
        let directive = lookup.directive(walker.node(*directive_idx).node_ref);
        let invalid = |description: Description| ValidationResult::invalid(
            RuleName::DirectivesAreInValidLocations,
            description,
            directive.position,
            Some(directive.name),
        );
        let Some(def) = lookup.directive_definition_by_name(directive.name) else {
            return invalid(Description::DirectiveNotDefined);
        };
        let allowed = walker.directive_location(lookup, *directive_idx)
            .is_some_and(|location| def.locations.contains(&location));
        if !allowed {
            return invalid(Description::DirectiveLocationNotAllowed);
        }
    }
    ValidationResult::Valid
}

/// A non-repeatable directive is applied at most once per location.
pub fn directives_are_unique_per_location(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    for set_idx in walker.directive_sets() {
        let directives = lookup.directive_set(Some(walker.node(*set_idx).node_ref));
        for (idx, directive_ref) in directives.iter().enumerate() {
            let directive = lookup.directive(*directive_ref);
            let repeatable = lookup.directive_definition_by_name(directive.name)
                .is_some_and(|def| def.repeatable);
            if repeatable {
                continue;
            }
            let repeated = directives[idx + 1..].iter()
                .any(|other| lookup.bytes_equal(lookup.directive(*other).name, directive.name));
            if repeated {
                return ValidationResult::invalid(
                    RuleName::DirectivesAreUniquePerLocation,
                    Description::DirectiveMustBeUniquePerLocation,
                    directive.position,
                    Some(directive.name),
                );
            }
        }
    }
    ValidationResult::Valid
}

/// Every `NonNull` directive argument without a default is passed, with a
/// valid value. Undefined directives are skipped.
pub fn directives_have_required_arguments(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    check_required_arguments(lookup, walker).into()
}

fn check_required_arguments(lookup: &Lookup<'_>, walker: &Walker) -> Result<(), RuleViolation> {
    for directive_idx in walker.directives() {
        let directive = lookup.directive(walker.node(*directive_idx).node_ref);
        let Some(def) = lookup.directive_definition_by_name(directive.name) else {
            continue;
        };
        let arguments = lookup.argument_set(directive.argument_set);
        let scopes = variable_scopes(lookup, walker, *directive_idx);

        for arg_def_ref in &def.arguments_definition {
            let arg_def = lookup.input_value_definition(*arg_def_ref);
            if !is_required(lookup, arg_def) {
                continue;
            }
            let Some(argument) = lookup.argument_by_name(arguments, arg_def.name) else {
                return Err(RuleViolation::new(
                    RuleName::DirectivesHaveRequiredArguments,
                    Description::DirectiveRequiredArgumentMissing,
                    directive.position,
                    Some(arg_def.name),
                ));
            };
            if !value_is_valid_in_scopes(lookup, argument.value, arg_def, &scopes) {
                return Err(RuleViolation::new(
                    RuleName::DirectivesHaveRequiredArguments,
                    Description::DirectiveArgumentValueInvalid,
                    argument.position,
                    Some(argument.name),
                ));
            }
        }
    }
    Ok(())
}

/// Every argument passed to a directive is declared by its definition and
/// has a valid value.
pub fn directive_arguments_are_defined(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    check_arguments_are_defined(lookup, walker).into()
}

fn check_arguments_are_defined(lookup: &Lookup<'_>, walker: &Walker) -> Result<(), RuleViolation> {
    for directive_idx in walker.directives() {
        let directive = lookup.directive(walker.node(*directive_idx).node_ref);
        let arguments = lookup.argument_set(directive.argument_set);
        if arguments.is_empty() {
            continue;
        }
        let arg_defs = lookup.directive_definition_by_name(directive.name)
            .map(|def| def.arguments_definition.as_slice())
            .unwrap_or_default();
        let scopes = variable_scopes(lookup, walker, *directive_idx);

        for argument_ref in arguments {
            let argument = lookup.argument(*argument_ref);
            let violation = |description: Description| RuleViolation::new(
                RuleName::DirectiveArgumentsAreDefined,
                description,
                argument.position,
                Some(argument.name),
            );
            let Some(arg_def) = lookup.input_value_definition_by_name(arg_defs, argument.name) else {
                return Err(violation(Description::DirectiveArgumentNotDefined));
            };
            if !value_is_valid_in_scopes(lookup, argument.value, arg_def, &scopes) {
                return Err(violation(Description::DirectiveArgumentValueInvalid));
            }
        }
    }
    Ok(())
}

/// Directive arguments hold no variables. Meant for type-system documents,
/// where no operation could supply them.
pub fn directive_arguments_are_constants(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    for directive_idx in walker.directives() {
        let directive = lookup.directive(walker.node(*directive_idx).node_ref);
        for argument_ref in lookup.argument_set(directive.argument_set) {
            let argument = lookup.argument(*argument_ref);
            if lookup.value_contains_variable(argument.value) {
                return ValidationResult::invalid(
                    RuleName::DirectiveArgumentsAreConstants,
                    Description::DirectiveArgumentMustBeConstant,
                    argument.position,
                    Some(argument.name),
                );
            }
        }
    }
    ValidationResult::Valid
}
