mod byte_slice;
#[allow(clippy::module_inception)]
mod document;
mod document_build_error;
mod document_builder;
mod nodes;

pub use byte_slice::ByteSliceReference;
pub use byte_slice::Interner;
pub use document::Document;
pub use document_build_error::DocumentBuildError;
pub use nodes::Argument;
pub use nodes::Directive;
pub use nodes::DirectiveDefinition;
pub use nodes::DirectiveLocation;
pub use nodes::EnumTypeDefinition;
pub use nodes::EnumValueDefinition;
pub use nodes::Field;
pub use nodes::FieldDefinition;
pub use nodes::FragmentDefinition;
pub use nodes::FragmentSpread;
pub use nodes::InlineFragment;
pub use nodes::InputObjectTypeDefinition;
pub use nodes::InputValueDefinition;
pub use nodes::InterfaceTypeDefinition;
pub use nodes::ObjectField;
pub use nodes::ObjectTypeDefinition;
pub use nodes::OperationDefinition;
pub use nodes::OperationType;
pub use nodes::Ref;
pub use nodes::ScalarTypeDefinition;
pub use nodes::SchemaDefinition;
pub use nodes::SelectionSet;
pub use nodes::Type;
pub use nodes::UnionTypeDefinition;
pub use nodes::Value;
pub use nodes::VariableDefinition;
