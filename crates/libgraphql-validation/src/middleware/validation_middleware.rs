use crate::Document;
use crate::Lookup;
use crate::Validator;
use crate::Walker;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareError;
use crate::middleware::RequestContext;
use crate::validation::ValidationResult;

/// Rejects requests that fail validation.
#[derive(Clone, Debug, Default)]
pub struct ValidationMiddleware {
    validator: Validator,
}
impl ValidationMiddleware {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }
}
impl Middleware for ValidationMiddleware {
    fn on_request(
        &self,
        _ctx: &RequestContext,
        doc: &mut Document,
    ) -> Result<(), MiddlewareError> {
        let lookup = Lookup::new(doc);
        let mut walker = Walker::new();
        walker.walk_executable(&lookup);

        match self.validator.validate(&lookup, &walker) {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violation) => Err(MiddlewareError::Invalid(violation)),
        }
    }
}
