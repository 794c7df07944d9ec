mod node;
mod queries;
#[allow(clippy::module_inception)]
mod walker;

pub use node::Node;
pub use node::NodeKind;
pub use queries::FieldDirective;
pub use walker::Walker;

#[cfg(test)]
mod tests;
