use crate::document::Ref;
use crate::loc::Position;
use crate::lookup::Lookup;
use crate::walker::Node;
use crate::walker::NodeKind;

/// Builds a parent-addressable node graph over a [`Document`](crate::Document)
/// and indexes the nodes by kind.
///
/// A walker holds no reference to the document it last walked. Every query
/// takes the same [`Lookup`] that was passed to the walk; passing another
/// one is a logic error. Each walk starts by clearing the previous graph,
/// keeping allocated capacity, so one walker can be reused for many
/// documents (one at a time).
///
/// Fragment spreads are not expanded: a fragment's contents appear once,
/// under its `FragmentDefinition` root.
#[derive(Debug, Default)]
pub struct Walker {
    pub(crate) nodes: Vec<Node>,
    caches: [Vec<usize>; NodeKind::COUNT],
}
impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
            caches: Default::default(),
        }
    }

    fn reset(&mut self) {
        self.nodes.clear();
        for cache in &mut self.caches {
            cache.clear();
        }
    }

    fn put_node(
        &mut self,
        parent: Option<usize>,
        kind: NodeKind,
        node_ref: Ref,
        position: Position,
    ) -> usize {
        self.nodes.push(Node {
            parent,
            kind,
            node_ref,
            position,
        });
        let idx = self.nodes.len() - 1;
        self.caches[kind as usize].push(idx);
        idx
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Indices of every walked node of `kind`, in traversal order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> &[usize] {
        &self.caches[kind as usize]
    }

    pub fn argument_sets(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::ArgumentSet)
    }

    pub fn arguments(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::Argument)
    }

    pub fn directive_sets(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::DirectiveSet)
    }

    pub fn directives(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::Directive)
    }

    pub fn fields(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::Field)
    }

    pub fn fragment_definitions(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::FragmentDefinition)
    }

    pub fn fragment_spreads(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::FragmentSpread)
    }

    pub fn inline_fragments(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::InlineFragment)
    }

    pub fn operation_definitions(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::OperationDefinition)
    }

    pub fn selection_sets(&self) -> &[usize] {
        self.nodes_of_kind(NodeKind::SelectionSet)
    }

    /// Walks the operations and fragments of `lookup`'s document.
    pub fn walk_executable(&mut self, lookup: &Lookup<'_>) {
        self.reset();

        for (idx, fragment) in lookup.fragment_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::FragmentDefinition, idx, fragment.position);
            self.walk_directive_set(lookup, fragment.directive_set, node);
            self.walk_selection_set(lookup, fragment.selection_set, node);
        }

        for (idx, operation) in lookup.operation_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::OperationDefinition, idx, operation.position);
            self.walk_directive_set(lookup, operation.directive_set, node);
            self.walk_selection_set(lookup, operation.selection_set, node);
        }

        log::trace!(
            "Walked executable document: {} nodes, {} fields, {} selection sets.",
            self.nodes.len(),
            self.fields().len(),
            self.selection_sets().len(),
        );
    }

    fn walk_directive_set(&mut self, lookup: &Lookup<'_>, set: Option<Ref>, parent: usize) {
        let Some(set_ref) = set else {
            return;
        };
        let position = self.nodes[parent].position;
        let set_node = self.put_node(Some(parent), NodeKind::DirectiveSet, set_ref, position);
        for directive_ref in lookup.directive_set(set) {
            let directive = lookup.directive(*directive_ref);
            let node = self.put_node(
                Some(set_node),
                NodeKind::Directive,
                *directive_ref,
                directive.position,
            );
            self.walk_argument_set(lookup, directive.argument_set, node);
        }
    }

    fn walk_argument_set(&mut self, lookup: &Lookup<'_>, set: Option<Ref>, parent: usize) {
        let Some(set_ref) = set else {
            return;
        };
        let position = self.nodes[parent].position;
        let set_node = self.put_node(Some(parent), NodeKind::ArgumentSet, set_ref, position);
        for argument_ref in lookup.argument_set(set) {
            let argument = lookup.argument(*argument_ref);
            self.put_node(Some(set_node), NodeKind::Argument, *argument_ref, argument.position);
        }
    }

    fn walk_selection_set(&mut self, lookup: &Lookup<'_>, set: Option<Ref>, parent: usize) {
        let Some(set_ref) = set else {
            return;
        };
        let position = self.nodes[parent].position;
        let set_node = self.put_node(Some(parent), NodeKind::SelectionSet, set_ref, position);
        let selections = lookup.selection_set(set);

        for field_ref in &selections.fields {
            let field = lookup.field(*field_ref);
            let node = self.put_node(Some(set_node), NodeKind::Field, *field_ref, field.position);
            self.walk_directive_set(lookup, field.directive_set, node);
            self.walk_argument_set(lookup, field.argument_set, node);
            self.walk_selection_set(lookup, field.selection_set, node);
        }

        for inline_ref in &selections.inline_fragments {
            let inline = lookup.inline_fragment(*inline_ref);
            let node = self.put_node(
                Some(set_node),
                NodeKind::InlineFragment,
                *inline_ref,
                inline.position,
            );
            self.walk_directive_set(lookup, inline.directive_set, node);
            self.walk_selection_set(lookup, inline.selection_set, node);
        }

        for spread_ref in &selections.fragment_spreads {
            let spread = lookup.fragment_spread(*spread_ref);
            let node = self.put_node(
                Some(set_node),
                NodeKind::FragmentSpread,
                *spread_ref,
                spread.position,
            );
            self.walk_directive_set(lookup, spread.directive_set, node);
        }
    }

    /// Walks the schema, type and directive definitions of `lookup`'s
    /// document.
    pub fn walk_type_system_definition(&mut self, lookup: &Lookup<'_>) {
        self.reset();
        let doc = lookup.document();

        if let Some(schema_def) = &doc.schema_definition {
            let node = self.put_node(None, NodeKind::SchemaDefinition, 0, schema_def.position);
            self.walk_directive_set(lookup, schema_def.directive_set, node);
        }

        for (idx, def) in lookup.object_type_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::ObjectTypeDefinition, idx, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
            self.walk_field_definitions(lookup, &def.fields_definition, node);
        }

        for (idx, def) in lookup.interface_type_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::InterfaceTypeDefinition, idx, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
            self.walk_field_definitions(lookup, &def.fields_definition, node);
        }

        for (idx, def) in lookup.union_type_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::UnionTypeDefinition, idx, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
        }

        for (idx, def) in lookup.enum_type_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::EnumTypeDefinition, idx, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
            for value_ref in &def.values {
                let value = lookup.enum_value_definition(*value_ref);
                let value_node = self.put_node(
                    Some(node),
                    NodeKind::EnumValueDefinition,
                    *value_ref,
                    value.position,
                );
                self.walk_directive_set(lookup, value.directive_set, value_node);
            }
        }

        for (idx, def) in lookup.scalar_type_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::ScalarTypeDefinition, idx, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
        }

        for (idx, def) in lookup.input_object_type_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::InputObjectTypeDefinition, idx, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
            self.walk_input_value_definitions(lookup, &def.input_fields, node);
        }

        for (idx, def) in lookup.directive_definitions().iter().enumerate() {
            let node = self.put_node(None, NodeKind::DirectiveDefinition, idx, def.position);
            self.walk_input_value_definitions(lookup, &def.arguments_definition, node);
        }

        log::trace!(
            "Walked type-system document: {} nodes, {} directives.",
            self.nodes.len(),
            self.directives().len(),
        );
    }

    fn walk_field_definitions(&mut self, lookup: &Lookup<'_>, defs: &[Ref], parent: usize) {
        for def_ref in defs {
            let def = lookup.field_definition(*def_ref);
            let node = self.put_node(Some(parent), NodeKind::FieldDefinition, *def_ref, def.position);
            self.walk_directive_set(lookup, def.directive_set, node);
            self.walk_input_value_definitions(lookup, &def.arguments_definition, node);
        }
    }

    fn walk_input_value_definitions(&mut self, lookup: &Lookup<'_>, defs: &[Ref], parent: usize) {
        for def_ref in defs {
            let def = lookup.input_value_definition(*def_ref);
            let node = self.put_node(
                Some(parent),
                NodeKind::InputValueDefinition,
                *def_ref,
                def.position,
            );
            self.walk_directive_set(lookup, def.directive_set, node);
        }
    }
}
