//! The rules a [`Validator`](crate::Validator) is assembled from.
//!
//! Every rule has the [`Rule`](crate::validation::Rule) signature and
//! reports the first violation it finds.

mod arguments;
mod directives;
mod field_selection_merging;
mod field_selections;
mod fragments;
mod operations;
mod values;
mod variables;

pub use arguments::argument_uniqueness;
pub use arguments::required_arguments;
pub use arguments::valid_arguments;
pub use directives::directive_arguments_are_constants;
pub use directives::directive_arguments_are_defined;
pub use directives::directives_are_defined;
pub use directives::directives_are_in_valid_locations;
pub use directives::directives_are_unique_per_location;
pub use directives::directives_have_required_arguments;
pub use field_selection_merging::field_selection_merging;
pub use field_selections::field_selections;
pub use fragments::fragments;
pub use operations::lone_anonymous_operation;
pub use operations::operation_name_uniqueness;
pub use operations::subscription_single_root_field;
pub use values::values;
pub use variables::all_variable_uses_defined;
pub use variables::all_variables_used;
pub use variables::variable_uniqueness;
pub use variables::variables_are_input_types;

use crate::document::InputValueDefinition;
use crate::document::Ref;
use crate::lookup::Lookup;
use crate::walker::Walker;
use smallvec::SmallVec;

type VariableScopes<'doc> = SmallVec<[&'doc [Ref]; 4]>;

/// Variable definitions of each operation the node at `idx` is evaluated
/// in. A node no operation reaches (a type-system node or an unused
/// fragment) gets one empty scope, so its values must be constant.
fn variable_scopes<'doc>(lookup: &Lookup<'doc>, walker: &Walker, idx: usize) -> VariableScopes<'doc> {
    let operations = walker.node_usage_in_operations(lookup, idx);
    if operations.is_empty() {
        return smallvec::smallvec![&[][..]];
    }
    operations.iter()
        .map(|op_ref| lookup.operation_definition(*op_ref).variable_definitions.as_slice())
        .collect()
}

/// Whether `value` is valid for the input value definition `def` in every
/// scope.
fn value_is_valid_in_scopes(
    lookup: &Lookup<'_>,
    value: Ref,
    def: &InputValueDefinition,
    scopes: &VariableScopes<'_>,
) -> bool {
    scopes.iter().all(|variable_definitions| {
        lookup.value_is_valid(
            value,
            def.value_type,
            variable_definitions,
            def.default_value.is_some(),
        )
    })
}

/// Whether an input value definition must be supplied: it is `NonNull` and
/// has no default.
fn is_required(lookup: &Lookup<'_>, def: &InputValueDefinition) -> bool {
    lookup.ty(def.value_type).is_non_null() && def.default_value.is_none()
}
