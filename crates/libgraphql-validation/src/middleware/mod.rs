//! Request pipeline around validation: middlewares augment the schema once,
//! rewrite each request's executable document, and may reject it.

mod base_schema_middleware;
mod context_middleware;
mod invoker;
mod middleware_error;
mod validation_middleware;

pub use base_schema_middleware::BaseSchemaMiddleware;
pub use context_middleware::ContextMiddleware;
pub use invoker::InvokerConfig;
pub use invoker::validate_request;
pub use middleware_error::MiddlewareError;
pub use validation_middleware::ValidationMiddleware;

use crate::Document;
use indexmap::IndexMap;

/// Request-scoped values (for example headers forwarded by a gateway),
/// keyed by name in insertion order.
pub type RequestContext = IndexMap<String, String>;

pub trait Middleware {
    /// Called once after the schema is parsed and before any executable
    /// text is added to `doc`.
    fn prepare_schema(&self, _doc: &mut Document) -> Result<(), MiddlewareError> {
        Ok(())
    }

    /// Called once per request, after the request's executable document
    /// has been added to `doc`.
    fn on_request(
        &self,
        _ctx: &RequestContext,
        _doc: &mut Document,
    ) -> Result<(), MiddlewareError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
