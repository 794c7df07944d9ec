use crate::document::Ref;
use crate::loc::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Argument,
    ArgumentSet,
    Directive,
    DirectiveDefinition,
    DirectiveSet,
    EnumTypeDefinition,
    EnumValueDefinition,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputObjectTypeDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    ObjectTypeDefinition,
    OperationDefinition,
    ScalarTypeDefinition,
    SchemaDefinition,
    SelectionSet,
    UnionTypeDefinition,
}
impl NodeKind {
    pub(crate) const COUNT: usize = 21;
}

/// One entry in a [`Walker`](crate::Walker)'s node arena.
///
/// `node_ref` indexes the [`Document`](crate::Document) table that matches
/// `kind`. A node without a parent is a root: an operation or fragment
/// definition, or a top-level type-system definition.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub parent: Option<usize>,
    pub kind: NodeKind,
    pub node_ref: Ref,
    pub position: Position,
}
