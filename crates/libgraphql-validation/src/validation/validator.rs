use crate::lookup::Lookup;
use crate::validation::RuleName;
use crate::validation::RuleViolation;
use crate::validation::ValidationResult;
use crate::validation::rules;
use crate::walker::Walker;

/// A validation rule: a pure check over a walked document.
pub type Rule = fn(&Lookup<'_>, &Walker) -> ValidationResult;

/// An ordered list of rules.
///
/// [`Validator::validate`] stops at the first failing rule, so the order
/// decides which violation is reported for a document that breaks several.
#[derive(Clone, Debug)]
pub struct Validator {
    rules: Vec<(RuleName, Rule)>,
}
impl Validator {
    pub fn new() -> Self {
        Self { rules: vec![] }
    }

    /// Rules checking the directive applications of a type-system document
    /// (walked with [`Walker::walk_type_system_definition`]).
    pub fn type_system() -> Self {
        Self::new()
            .with_rule(RuleName::DirectivesAreDefined, rules::directives_are_defined)
            .with_rule(RuleName::DirectivesAreInValidLocations, rules::directives_are_in_valid_locations)
            .with_rule(RuleName::DirectivesAreUniquePerLocation, rules::directives_are_unique_per_location)
            .with_rule(RuleName::DirectivesHaveRequiredArguments, rules::directives_have_required_arguments)
            .with_rule(RuleName::DirectiveArgumentsAreDefined, rules::directive_arguments_are_defined)
            .with_rule(RuleName::DirectiveArgumentsAreConstants, rules::directive_arguments_are_constants)
    }

    pub fn with_rule(mut self, name: RuleName, rule: Rule) -> Self {
        self.rules.push((name, rule));
        self
    }

    pub fn rule_names(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// Runs the rules in order and returns the first failure, or
    /// [`ValidationResult::Valid`] when every rule passes.
    pub fn validate(&self, lookup: &Lookup<'_>, walker: &Walker) -> ValidationResult {
        for (name, rule) in &self.rules {
            let result = rule(lookup, walker);
            if let ValidationResult::Invalid(violation) = &result {
                log::debug!(
                    "Rule {name} failed at {}: {violation}",
                    violation.meta.subject_position,
                );
                return result;
            }
        }
        ValidationResult::Valid
    }

    /// Runs every rule and returns each failure, in rule order.
    pub fn validate_all(&self, lookup: &Lookup<'_>, walker: &Walker) -> Vec<RuleViolation> {
        self.rules.iter()
            .filter_map(|(_, rule)| match rule(lookup, walker) {
                ValidationResult::Valid => None,
                ValidationResult::Invalid(violation) => Some(violation),
            })
            .collect()
    }
}
impl std::default::Default for Validator {
    /// Every executable-document rule.
    fn default() -> Self {
        Self::new()
            .with_rule(RuleName::OperationNameUniqueness, rules::operation_name_uniqueness)
            .with_rule(RuleName::LoneAnonymousOperation, rules::lone_anonymous_operation)
            .with_rule(RuleName::SubscriptionSingleRootField, rules::subscription_single_root_field)
            .with_rule(RuleName::Fragments, rules::fragments)
            .with_rule(RuleName::FieldSelections, rules::field_selections)
            .with_rule(RuleName::FieldSelectionMerging, rules::field_selection_merging)
            .with_rule(RuleName::DirectivesAreDefined, rules::directives_are_defined)
            .with_rule(RuleName::DirectivesAreInValidLocations, rules::directives_are_in_valid_locations)
            .with_rule(RuleName::DirectivesAreUniquePerLocation, rules::directives_are_unique_per_location)
            .with_rule(RuleName::DirectivesHaveRequiredArguments, rules::directives_have_required_arguments)
            .with_rule(RuleName::DirectiveArgumentsAreDefined, rules::directive_arguments_are_defined)
            .with_rule(RuleName::ArgumentUniqueness, rules::argument_uniqueness)
            .with_rule(RuleName::RequiredArguments, rules::required_arguments)
            .with_rule(RuleName::ValidArguments, rules::valid_arguments)
            .with_rule(RuleName::Values, rules::values)
            .with_rule(RuleName::VariableUniqueness, rules::variable_uniqueness)
            .with_rule(RuleName::VariablesAreInputTypes, rules::variables_are_input_types)
            .with_rule(RuleName::AllVariableUsesDefined, rules::all_variable_uses_defined)
            .with_rule(RuleName::AllVariablesUsed, rules::all_variables_used)
    }
}
