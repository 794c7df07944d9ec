use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::validation::rules::value_is_valid_in_scopes;
use crate::validation::rules::variable_scopes;
use crate::walker::Walker;

/// Every argument value is valid for its declared type, with variables
/// resolved through each operation that reaches the argument.
///
/// Unlike [`valid_arguments`](super::valid_arguments), a call site whose
/// definition cannot be found is a violation of its own.
pub fn values(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    check_all(lookup, walker).into()
}

fn check_all(lookup: &Lookup<'_>, walker: &Walker) -> Result<(), RuleViolation> {
    for set_idx in walker.argument_sets() {
        let set_node = walker.node(*set_idx);
        let Some(defs) = walker.arguments_definition(lookup, *set_idx) else {
            return Err(RuleViolation::new(
                RuleName::Values,
                Description::ArgumentsDefinitionNotFound,
                set_node.position,
                None,
            ));
        };
        let scopes = variable_scopes(lookup, walker, *set_idx);

        for argument_ref in lookup.argument_set(Some(set_node.node_ref)) {
            let argument = lookup.argument(*argument_ref);
            let violation = |description: Description| RuleViolation::new(
                RuleName::Values,
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
