use crate::ast;
use crate::document::ByteSliceReference;
use crate::loc::Position;

/// Index into one of a [`Document`](crate::Document)'s tables. Which table is
/// implied by the field holding it; an absent reference is `None`.
pub type Ref = usize;

/// A literal or variable appearing in an argument, default value, list or
/// input object.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(ByteSliceReference),
    Float(f64),
    Int(i64),
    /// Index into the list-value table.
    List(Ref),
    Null,
    /// Index into the object-value table.
    Object(Ref),
    String(ByteSliceReference),
    Variable(ByteSliceReference),
}

/// A type annotation. Wrappers point at the wrapped type by index.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub enum Type {
    List(Ref),
    Named(ByteSliceReference),
    NonNull(Ref),
}
impl Type {
    pub fn name(&self) -> Option<ByteSliceReference> {
        match self {
            Self::Named(name) => Some(*name),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    pub fn of_type(&self) -> Option<Ref> {
        match self {
            Self::List(of_type) | Self::NonNull(of_type) => Some(*of_type),
            Self::Named(_) => None,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub name: ByteSliceReference,
    pub value: Ref,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: ByteSliceReference,
    pub value: Ref,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub name: ByteSliceReference,
    pub argument_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub fields: Vec<Ref>,
    pub inline_fragments: Vec<Ref>,
    pub fragment_spreads: Vec<Ref>,
}
impl SelectionSet {
    pub fn has_selections(&self) -> bool {
        !self.fields.is_empty()
            || !self.inline_fragments.is_empty()
            || !self.fragment_spreads.is_empty()
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub alias: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub argument_set: Option<Ref>,
    pub directive_set: Option<Ref>,
    pub selection_set: Option<Ref>,
    pub position: Position,
}
impl Field {
    /// The key this field occupies in a response: its alias if it has one,
    /// otherwise its name.
    pub fn response_name(&self) -> ByteSliceReference {
        self.alias.unwrap_or(self.name)
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    /// Index into the type table (always a `Type::Named`).
    pub type_condition: Option<Ref>,
    pub directive_set: Option<Ref>,
    pub selection_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub fragment_name: ByteSliceReference,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: ByteSliceReference,
    pub type_condition: Ref,
    pub directive_set: Option<Ref>,
    pub selection_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}
impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// Name of the object type that roots this kind of operation when the
    /// schema has no `schema { ... }` definition.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<ByteSliceReference>,
    pub variable_definitions: Vec<Ref>,
    pub directive_set: Option<Ref>,
    pub selection_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub variable: ByteSliceReference,
    pub var_type: Ref,
    pub default_value: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub query: Option<ByteSliceReference>,
    pub mutation: Option<ByteSliceReference>,
    pub subscription: Option<ByteSliceReference>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub name: ByteSliceReference,
    pub implements_interfaces: Vec<ByteSliceReference>,
    pub fields_definition: Vec<Ref>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub name: ByteSliceReference,
    pub implements_interfaces: Vec<ByteSliceReference>,
    pub fields_definition: Vec<Ref>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub name: ByteSliceReference,
    pub member_types: Vec<ByteSliceReference>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub name: ByteSliceReference,
    pub values: Vec<Ref>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub name: ByteSliceReference,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub name: ByteSliceReference,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub name: ByteSliceReference,
    pub input_fields: Vec<Ref>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub name: ByteSliceReference,
    pub arguments_definition: Vec<Ref>,
    pub field_type: Ref,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

/// An argument of a field or directive definition, or a field of an input
/// object type.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub name: ByteSliceReference,
    pub value_type: Ref,
    pub default_value: Option<Ref>,
    pub directive_set: Option<Ref>,
    pub position: Position,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub name: ByteSliceReference,
    pub arguments_definition: Vec<Ref>,
    pub locations: Vec<DirectiveLocation>,
    pub repeatable: bool,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}
impl std::convert::From<&ast::schema::DirectiveLocation> for DirectiveLocation {
    fn from(location: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLocation;
        match location {
            AstLocation::ArgumentDefinition => Self::ArgumentDefinition,
            AstLocation::Enum => Self::Enum,
            AstLocation::EnumValue => Self::EnumValue,
            AstLocation::Field => Self::Field,
            AstLocation::FieldDefinition => Self::FieldDefinition,
            AstLocation::FragmentDefinition => Self::FragmentDefinition,
            AstLocation::FragmentSpread => Self::FragmentSpread,
            AstLocation::InlineFragment => Self::InlineFragment,
            AstLocation::InputFieldDefinition => Self::InputFieldDefinition,
            AstLocation::InputObject => Self::InputObject,
            AstLocation::Interface => Self::Interface,
            AstLocation::Mutation => Self::Mutation,
            AstLocation::Object => Self::Object,
            AstLocation::Query => Self::Query,
            AstLocation::Scalar => Self::Scalar,
            AstLocation::Schema => Self::Schema,
            AstLocation::Subscription => Self::Subscription,
            AstLocation::Union => Self::Union,
            AstLocation::VariableDefinition => Self::VariableDefinition,
        }
    }
}
