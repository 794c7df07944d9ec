use crate::document::ByteSliceReference;
use crate::loc::Position;
use crate::validation::Description;
use crate::validation::RuleName;
use crate::validation::RuleViolation;

/// Outcome of running one rule, or a whole [`Validator`](crate::Validator).
#[derive(Clone, Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(RuleViolation),
}
impl ValidationResult {
    pub fn invalid(
        rule_name: RuleName,
        description: Description,
        subject_position: Position,
        subject_name_ref: Option<ByteSliceReference>,
    ) -> Self {
        Self::Invalid(RuleViolation::new(
            rule_name,
            description,
            subject_position,
            subject_name_ref,
        ))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }

    pub fn into_result(self) -> Result<(), RuleViolation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}
impl std::convert::From<Result<(), RuleViolation>> for ValidationResult {
    fn from(result: Result<(), RuleViolation>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(violation) => Self::Invalid(violation),
        }
    }
}
