use crate::document::ByteSliceReference;
use crate::loc::Position;
use thiserror::Error;

/// The rule that produced a [`RuleViolation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleName {
    AllVariableUsesDefined,
    AllVariablesUsed,
    ArgumentUniqueness,
    DirectiveArgumentsAreConstants,
    DirectiveArgumentsAreDefined,
    DirectivesAreDefined,
    DirectivesAreInValidLocations,
    DirectivesAreUniquePerLocation,
    DirectivesHaveRequiredArguments,
    FieldSelectionMerging,
    FieldSelections,
    Fragments,
    LoneAnonymousOperation,
    OperationNameUniqueness,
    RequiredArguments,
    SubscriptionSingleRootField,
    ValidArguments,
    Values,
    VariableUniqueness,
    VariablesAreInputTypes,
}
impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Which condition of a rule failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Description {
    CompositeFieldMustHaveSelections,
    ArgumentMustBeUnique,
    ArgumentNotDefined,
    ArgumentValueInvalid,
    ArgumentsDefinitionNotFound,
    DirectiveArgumentMustBeConstant,
    DirectiveArgumentNotDefined,
    DirectiveArgumentValueInvalid,
    DirectiveLocationNotAllowed,
    DirectiveMustBeUniquePerLocation,
    DirectiveNotDefined,
    DirectiveRequiredArgumentMissing,
    FieldNotDefinedOnType,
    FieldSelectionsCannotMerge,
    FragmentDeclaredButNeverUsed,
    FragmentNameMustBeUnique,
    FragmentSpreadCycle,
    FragmentSpreadNotPossible,
    FragmentSpreadTargetNotDefined,
    FragmentTypeConditionMustBeComposite,
    LeafFieldMustNotHaveSelections,
    OnlyOneAnonymousOperationAllowed,
    OperationNameMustBeUnique,
    OperationRootTypeNotDefined,
    RequiredArgumentMissing,
    SelectionSetTypeNotResolvable,
    SelectionSetsHaveDifferentResponseShapes,
    SubscriptionMustHaveOneRootField,
    VariableDeclaredButNeverUsed,
    VariableMustBeUnique,
    VariableNotDefinedOnOperation,
    VariableTypeMustBeInputType,
}
impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Where a violation was found.
#[derive(Clone, Copy, Debug, Default)]
pub struct Meta {
    pub subject_position: Position,
    /// Name of the offending operation, fragment, field, directive, argument
    /// or variable, when it has one.
    pub subject_name_ref: Option<ByteSliceReference>,
}

/// A failed validation rule.
#[derive(Clone, Debug, Error)]
#[error("RuleName: {rule_name}, Description: {description}")]
pub struct RuleViolation {
    pub rule_name: RuleName,
    pub description: Description,
    pub meta: Meta,
}
impl RuleViolation {
    pub fn new(
        rule_name: RuleName,
        description: Description,
        subject_position: Position,
        subject_name_ref: Option<ByteSliceReference>,
    ) -> Self {
        Self {
            rule_name,
            description,
            meta: Meta {
                subject_position,
                subject_name_ref,
            },
        }
    }
}
