mod rule_violation;
pub mod rules;
mod validation_result;
mod validator;

pub use rule_violation::Description;
pub use rule_violation::Meta;
pub use rule_violation::RuleName;
pub use rule_violation::RuleViolation;
pub use validation_result::ValidationResult;
pub use validator::Rule;
pub use validator::Validator;

#[cfg(test)]
mod tests;
