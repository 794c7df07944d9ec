use crate::DocumentBuildError;
use crate::validation::RuleViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MiddlewareError {
    #[error(transparent)]
    DocumentBuildError(#[from] DocumentBuildError),

    #[error("Document is {size} bytes, over the configured limit of {limit} bytes")]
    DocumentTooLarge {
        size: usize,
        limit: usize,
    },

    #[error("query is invalid: {0}")]
    Invalid(RuleViolation),

    #[error(
        "@addArgumentFromContext on field `{field_name}` needs string `name` and \
        `contextKey` arguments"
    )]
    MalformedContextDirective {
        field_name: String,
    },

    #[error("No value in the request context for key `{0}`")]
    MissingContextValue(String),
}
