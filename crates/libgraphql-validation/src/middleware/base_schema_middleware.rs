use crate::Document;
use crate::Lookup;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareError;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

const BUILTIN_DIRECTIVES: [(&str, &str); 3] = [
    ("deprecated", "directive @deprecated(reason: String = \"No longer supported\") on FIELD_DEFINITION | ENUM_VALUE"),
    ("include", "directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT"),
    ("skip", "directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT"),
];

/// Completes a schema with the built-in scalars and directives it does not
/// declare itself.
#[derive(Clone, Debug, Default)]
pub struct BaseSchemaMiddleware;
impl BaseSchemaMiddleware {
    /// SDL for every built-in definition missing from `doc`.
    fn missing_definitions(doc: &Document) -> String {
        let lookup = Lookup::new(doc);
        let mut sdl = String::new();

        for scalar in BUILTIN_SCALARS {
            let declared = lookup.scalar_type_definitions().iter()
                .any(|def| lookup.name_is(def.name, scalar));
            if !declared {
                sdl.push_str("scalar ");
                sdl.push_str(scalar);
                sdl.push('\n');
            }
        }

        for (name, definition) in BUILTIN_DIRECTIVES {
            let declared = lookup.directive_definitions().iter()
                .any(|def| lookup.name_is(def.name, name));
            if !declared {
                sdl.push_str(definition);
                sdl.push('\n');
            }
        }

        sdl
    }
}
impl Middleware for BaseSchemaMiddleware {
    fn prepare_schema(&self, doc: &mut Document) -> Result<(), MiddlewareError> {
        let sdl = Self::missing_definitions(doc);
        if sdl.is_empty() {
            return Ok(());
        }
        log::trace!("Adding built-in definitions to the schema:\n{sdl}");
        doc.parse_type_system_definition(&sdl)?;
        Ok(())
    }
}
