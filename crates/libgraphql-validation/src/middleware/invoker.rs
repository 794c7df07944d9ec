use crate::Document;
use crate::Lookup;
use crate::Validator;
use crate::Walker;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareError;
use crate::middleware::RequestContext;
use crate::validation::ValidationResult;

/// Limits and sizing for [`validate_request`].
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct InvokerConfig {
    /// Queries longer than this many bytes are rejected before parsing.
    /// The schema text does not count toward the limit.
    pub max_document_bytes: usize,

    /// Node capacity the walker is created with.
    pub walker_node_capacity: usize,
}
impl std::default::Default for InvokerConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 1024 * 1024,
            walker_node_capacity: 1024,
        }
    }
}

/// Builds a document from `schema_sdl` and `query`, passes it through
/// `middlewares` and validates the result with the default rules.
///
/// Every middleware prepares the schema before the query is parsed; the
/// middlewares then see the request in order. A middleware error ends the
/// request.
pub fn validate_request(
    schema_sdl: &str,
    query: &str,
    ctx: &RequestContext,
    middlewares: &[&dyn Middleware],
    config: &InvokerConfig,
) -> Result<ValidationResult, MiddlewareError> {
    if query.len() > config.max_document_bytes {
        return Err(MiddlewareError::DocumentTooLarge {
            size: query.len(),
            limit: config.max_document_bytes,
        });
    }

    let mut doc = Document::new();
    doc.parse_type_system_definition(schema_sdl)?;
    for middleware in middlewares {
        middleware.prepare_schema(&mut doc)?;
    }

    doc.parse_executable_definition(query)?;
    for middleware in middlewares {
        middleware.on_request(ctx, &mut doc)?;
    }

    let lookup = Lookup::new(&doc);
    let mut walker = Walker::with_capacity(config.walker_node_capacity);
    walker.walk_executable(&lookup);
    Ok(Validator::default().validate(&lookup, &walker))
}
