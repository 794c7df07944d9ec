//! Validation of GraphQL executable documents against a previously parsed
//! type-system document.
//!
//! Both documents are lowered into one arena-backed [`Document`]. A
//! [`Lookup`] reads from it, a [`Walker`] indexes it, and a [`Validator`]
//! runs an ordered list of rules over the pair, stopping at the first
//! failure.
//!
//! ```
//! use libgraphql_validation::Document;
//! use libgraphql_validation::Lookup;
//! use libgraphql_validation::Validator;
//! use libgraphql_validation::Walker;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::new();
//! doc.parse_type_system_definition("type Query { hello: String }")?;
//! doc.parse_executable_definition("{ hello }")?;
//!
//! let lookup = Lookup::new(&doc);
//! let mut walker = Walker::new();
//! walker.walk_executable(&lookup);
//!
//! let result = Validator::default().validate(&lookup, &walker);
//! assert!(result.is_valid());
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod document;
pub mod file_reader;
pub mod loc;
pub mod lookup;
pub mod middleware;
pub mod snapshot;
pub mod validation;
pub mod walker;

pub use document::Document;
pub use document::DocumentBuildError;
pub use lookup::Lookup;
pub use validation::ValidationResult;
pub use validation::Validator;
pub use walker::Walker;

#[cfg(test)]
mod test_utils;
