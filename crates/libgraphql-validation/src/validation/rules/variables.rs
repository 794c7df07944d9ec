use crate::document::ByteSliceReference;
use crate::lookup::Lookup;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::ValidationResult;
use crate::walker::Walker;

/// No operation declares the same variable twice.
pub fn variable_uniqueness(lookup: &Lookup<'_>, _walker: &Walker) -> ValidationResult {
    for operation in lookup.operation_definitions() {
        let var_defs = &operation.variable_definitions;
        for (idx, var_ref) in var_defs.iter().enumerate() {
            let var_def = lookup.variable_definition(*var_ref);
            let repeated = var_defs[idx + 1..].iter().any(|other| {
                lookup.bytes_equal(lookup.variable_definition(*other).variable, var_def.variable)
            });
            if repeated {
                return ValidationResult::invalid(
                    RuleName::VariableUniqueness,
                    Description::VariableMustBeUnique,
                    var_def.position,
                    Some(var_def.variable),
                );
            }
        }
    }
    ValidationResult::Valid
}

/// Every variable is declared with a scalar, enum or input object type.
pub fn variables_are_input_types(lookup: &Lookup<'_>, _walker: &Walker) -> ValidationResult {
    for operation in lookup.operation_definitions() {
        for var_ref in &operation.variable_definitions {
            let var_def = lookup.variable_definition(*var_ref);
            if !lookup.is_input_type(lookup.type_name(var_def.var_type)) {
                return ValidationResult::invalid(
                    RuleName::VariablesAreInputTypes,
                    Description::VariableTypeMustBeInputType,
                    var_def.position,
                    Some(var_def.variable),
                );
            }
        }
    }
    ValidationResult::Valid
}

/// Every variable an argument references is declared by each operation
/// that reaches the argument.
pub fn all_variable_uses_defined(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    let mut variables = Vec::new();
    for argument_idx in walker.arguments() {
        let argument = lookup.argument(walker.node(*argument_idx).node_ref);
        variables.clear();
        lookup.collect_variables(argument.value, &mut variables);
        if variables.is_empty() {
            continue;
        }

        for op_ref in walker.node_usage_in_operations(lookup, *argument_idx) {
            let operation = lookup.operation_definition(op_ref);
            let undefined = variables.iter().find(|variable| {
                lookup.variable_definition_by_name(**variable, &operation.variable_definitions)
                    .is_none()
            });
            if let Some(variable) = undefined {
                return ValidationResult::invalid(
                    RuleName::AllVariableUsesDefined,
                    Description::VariableNotDefinedOnOperation,
                    argument.position,
                    Some(*variable),
                );
            }
        }
    }
    ValidationResult::Valid
}

/// Every declared variable is referenced somewhere in its operation,
/// including the fragments the operation spreads.
pub fn all_variables_used(lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
    let operations = lookup.operation_definitions();
    let mut used: Vec<Vec<ByteSliceReference>> = vec![vec![]; operations.len()];
    let mut variables = Vec::new();

    for argument_idx in walker.arguments() {
        let argument = lookup.argument(walker.node(*argument_idx).node_ref);
        variables.clear();
        lookup.collect_variables(argument.value, &mut variables);
        if variables.is_empty() {
            continue;
        }
        for op_ref in walker.node_usage_in_operations(lookup, *argument_idx) {
            used[op_ref].extend_from_slice(&variables);
        }
    }

    for (op_ref, operation) in operations.iter().enumerate() {
        for var_ref in &operation.variable_definitions {
            let var_def = lookup.variable_definition(*var_ref);
            if !lookup.names_contain(&used[op_ref], var_def.variable) {
                return ValidationResult::invalid(
                    RuleName::AllVariablesUsed,
                    Description::VariableDeclaredButNeverUsed,
                    var_def.position,
                    Some(var_def.variable),
                );
            }
        }
    }
    ValidationResult::Valid
}
