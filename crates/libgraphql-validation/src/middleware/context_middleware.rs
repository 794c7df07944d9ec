use crate::Document;
use crate::Lookup;
use crate::Walker;
use crate::document::ByteSliceReference;
use crate::document::Ref;
use crate::document::Value;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareError;
use crate::middleware::RequestContext;

const DIRECTIVE_NAME: &str = "addArgumentFromContext";

const DIRECTIVE_DEFINITION: &str =
    "directive @addArgumentFromContext(name: String!, contextKey: String!) on FIELD_DEFINITION";

/// Adds arguments taken from the request context to fields whose schema
/// definition carries `@addArgumentFromContext`.
///
/// With the schema
///
/// ```graphql
/// type Query {
///     documents: [Document] @addArgumentFromContext(name: "user", contextKey: "user")
/// }
/// ```
///
/// and `user` set to `jsmith@example.org` in the context, the request
/// `{ documents { title } }` is rewritten to
/// `{ documents(user: "jsmith@example.org") { title } }`.
#[derive(Clone, Debug, Default)]
pub struct ContextMiddleware;

/// One annotated field definition.
struct RewriteConfig {
    type_name: ByteSliceReference,
    field_name: ByteSliceReference,
    argument_name: ByteSliceReference,
    context_key: String,
}

/// An argument to append to an executable field.
struct Rewrite {
    field: Ref,
    argument_name: ByteSliceReference,
    value: String,
}

impl ContextMiddleware {
    fn rewrite_configs(
        lookup: &Lookup<'_>,
        walker: &Walker,
    ) -> Result<Vec<RewriteConfig>, MiddlewareError> {
        walker.fields_containing_directive(lookup, DIRECTIVE_NAME).into_iter()
            .map(|field_directive| {
                let field_def = lookup.field_definition(field_directive.field_definition);
                let directive = lookup.directive(field_directive.directive);

                let mut argument_name = None;
                let mut context_key = None;
                for argument_ref in lookup.argument_set(directive.argument_set) {
                    let argument = lookup.argument(*argument_ref);
                    let Value::String(value) = lookup.value(argument.value) else {
                        continue;
                    };
                    if lookup.name_is(argument.name, "name") {
                        argument_name = Some(*value);
                    } else if lookup.name_is(argument.name, "contextKey") {
                        context_key = Some(lookup.str(*value).to_string());
                    }
                }

                match (argument_name, context_key) {
                    (Some(argument_name), Some(context_key)) => Ok(RewriteConfig {
                        type_name: field_directive.type_name,
                        field_name: field_def.name,
                        argument_name,
                        context_key,
                    }),
                    _ => Err(MiddlewareError::MalformedContextDirective {
                        field_name: lookup.str(field_def.name).to_string(),
                    }),
                }
            })
            .collect()
    }

    fn rewrites(
        doc: &Document,
        ctx: &RequestContext,
    ) -> Result<Vec<Rewrite>, MiddlewareError> {
        let lookup = Lookup::new(doc);
        let mut walker = Walker::new();
        walker.walk_type_system_definition(&lookup);
        let configs = Self::rewrite_configs(&lookup, &walker)?;
        if configs.is_empty() {
            return Ok(vec![]);
        }

        walker.walk_executable(&lookup);
        let mut rewrites = vec![];
        for field_idx in walker.fields() {
            let Some(set_idx) = walker.node(*field_idx).parent else {
                continue;
            };
            let Some(type_name) = walker.selection_set_type_name(&lookup, set_idx) else {
                continue;
            };
            let field_ref = walker.node(*field_idx).node_ref;
            let field = lookup.field(field_ref);

            let matching = configs.iter().filter(|config| {
                lookup.bytes_equal(config.type_name, type_name)
                    && lookup.bytes_equal(config.field_name, field.name)
            });
            for config in matching {
                let value = ctx.get(&config.context_key)
                    .ok_or_else(|| MiddlewareError::MissingContextValue(config.context_key.clone()))?;
                rewrites.push(Rewrite {
                    field: field_ref,
                    argument_name: config.argument_name,
                    value: value.clone(),
                });
            }
        }
        Ok(rewrites)
    }
}
impl Middleware for ContextMiddleware {
    fn prepare_schema(&self, doc: &mut Document) -> Result<(), MiddlewareError> {
        doc.parse_type_system_definition(DIRECTIVE_DEFINITION)?;
        Ok(())
    }

    fn on_request(
        &self,
        ctx: &RequestContext,
        doc: &mut Document,
    ) -> Result<(), MiddlewareError> {
        for rewrite in Self::rewrites(doc, ctx)? {
            log::trace!(
                "Adding argument `{}` from the request context to field {}.",
                String::from_utf8_lossy(doc.interner().get(rewrite.argument_name)),
                rewrite.field,
            );
            let value = doc.put_literal_bytes(rewrite.value.as_bytes());
            let value = doc.put_value(Value::String(value));
            doc.add_field_argument(rewrite.field, rewrite.argument_name, value);
        }
        Ok(())
    }
}
