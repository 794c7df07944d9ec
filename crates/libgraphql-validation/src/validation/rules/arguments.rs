use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::validation::rules::is_required;
use crate::validation::rules::value_is_valid_in_scopes;
use crate::validation::rules::variable_scopes;
use crate::walker::Walker;

/// Every argument passed to a field or directive is declared by it and has
/// a valid value in each operation the call site is part of.
///
/// A call site whose definition cannot be found declares no arguments.
pub fn valid_arguments(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    check_valid_arguments(lookup, walker).into()
}

fn check_valid_arguments(lookup: &Lookup<'_>, walker: &Walker) -> Result<(), RuleViolation> {
    for set_idx in walker.argument_sets() {
        let defs = walker.arguments_definition(lookup, *set_idx).unwrap_or_default();
        let scopes = variable_scopes(lookup, walker, *set_idx);

        for argument_ref in lookup.argument_set(Some(walker.node(*set_idx).node_ref)) {
            let argument = lookup.argument(*argument_ref);
            let violation = |description: Description| RuleViolation::new(
                RuleName::ValidArguments,
                description,
                argument.position,
                Some(argument.name),
            );
            let Some(def) = lookup.input_value_definition_by_name(defs, argument.name) else {
                return Err(violation(Description::ArgumentNotDefined));
            };
            if !value_is_valid_in_scopes(lookup, argument.value, def, &scopes) {
                return Err(violation(Description::ArgumentValueInvalid));
            }
        }
    }
    Ok(())
}

/// No argument set names the same argument twice.
pub fn argument_uniqueness(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    for set_idx in walker.argument_sets() {
        let arguments = lookup.argument_set(Some(walker.node(*set_idx).node_ref));
        for (idx, argument_ref) in arguments.iter().enumerate() {
            let argument = lookup.argument(*argument_ref);
            let repeated = arguments[idx + 1..].iter()
                .any(|other| lookup.bytes_equal(lookup.argument(*other).name, argument.name));
            if repeated {
                return ValidationResult::invalid(
                    RuleName::ArgumentUniqueness,
                    Description::ArgumentMustBeUnique,
                    argument.position,
                    Some(argument.name),
                );
            }
        }
    }
    ValidationResult::Valid
}

/// Every selected field is passed each argument that is `NonNull` without
/// a default. Fields other than `__typename` must resolve to a definition.
pub fn required_arguments(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    for field_idx in walker.fields() {
        let field = lookup.field(walker.node(*field_idx).node_ref);
        if lookup.name_is(field.name, "__typename") {
            continue;
        }
        let Some(field_def) = walker.field_definition(lookup, *field_idx) else {
            return ValidationResult::invalid(
                RuleName::RequiredArguments,
                Description::ArgumentsDefinitionNotFound,
                field.position,
                Some(field.name),
            );
        };

        let arguments = lookup.argument_set(field.argument_set);
        for def_ref in &field_def.arguments_definition {
            let def = lookup.input_value_definition(*def_ref);
            if !is_required(lookup, def) {
                continue;
            }
            if lookup.argument_by_name(arguments, def.name).is_none() {
                return ValidationResult::invalid(
                    RuleName::RequiredArguments,
                    Description::RequiredArgumentMissing,
                    field.position,
                    Some(def.name),
                );
            }
        }
    }
    ValidationResult::Valid
}
