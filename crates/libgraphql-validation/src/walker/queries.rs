use crate::document::ByteSliceReference;
use crate::document::DirectiveLocation;
use crate::document::FieldDefinition;
use crate::document::OperationType;
use crate::document::Ref;
use crate::lookup::Lookup;
use crate::walker::Node;
use crate::walker::NodeKind;
use crate::walker::Walker;
use smallvec::SmallVec;

type FieldPath = SmallVec<[ByteSliceReference; 8]>;

/// A field definition carrying a given directive. Returned by
/// [`Walker::fields_containing_directive`].
#[derive(Clone, Copy, Debug)]
pub struct FieldDirective {
    /// Name of the object or interface type declaring the field.
    pub type_name: ByteSliceReference,
    pub field_definition: Ref,
    pub directive: Ref,
}

impl Walker {
    pub fn parent(&self, idx: usize) -> Option<&Node> {
        self.nodes[idx].parent.map(|parent| &self.nodes[parent])
    }

    /// Index of the root node above `idx` (`idx` itself for roots).
    pub fn root(&self, idx: usize) -> usize {
        let mut current = idx;
        while let Some(parent) = self.nodes[current].parent {
            current = parent;
        }
        current
    }

    /// The operation definition enclosing `idx`, if its root is one.
    pub fn operation_definition(&self, idx: usize) -> Option<Ref> {
        let root = &self.nodes[self.root(idx)];
        match root.kind {
            NodeKind::OperationDefinition => Some(root.node_ref),
            _ => None,
        }
    }

    /// Every operation whose selections reach `idx`, directly or through
    /// fragment spreads. Each operation is listed once.
    pub fn node_usage_in_operations(&self, lookup: &Lookup<'_>, idx: usize) -> SmallVec<[Ref; 4]> {
        let root = &self.nodes[self.root(idx)];
        let mut operations = SmallVec::new();
        match root.kind {
            NodeKind::OperationDefinition => operations.push(root.node_ref),
            NodeKind::FragmentDefinition => {
                let mut reachable = lookup.index_pool().get();
                for (op_ref, operation) in lookup.operation_definitions().iter().enumerate() {
                    reachable.clear();
                    lookup.reachable_fragments(operation.selection_set, &mut reachable);
                    if reachable.contains(&root.node_ref) {
                        operations.push(op_ref);
                    }
                }
                lookup.index_pool().put(reachable);
            },
            _ => (),
        }
        operations
    }

    /// Response names of the fields enclosing `idx`, outermost first.
    /// Collection stops at the first ancestor that is neither a field nor a
    /// selection set.
    pub fn field_path(&self, lookup: &Lookup<'_>, idx: usize) -> FieldPath {
        let mut path = FieldPath::new();
        let mut current = Some(idx);
        while let Some(node_idx) = current {
            let node = &self.nodes[node_idx];
            match node.kind {
                NodeKind::Field => path.push(lookup.field(node.node_ref).response_name()),
                NodeKind::SelectionSet => (),
                _ => break,
            }
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Name of the type the selection set at node `set_idx` selects from.
    ///
    /// Climbs to the nearest ancestor that fixes a type (an inline fragment
    /// with a type condition, a fragment definition or an operation) and
    /// then follows the fields passed on the way back down through their
    /// declared types. `None` when any step cannot be resolved.
    pub fn selection_set_type_name(
        &self,
        lookup: &Lookup<'_>,
        set_idx: usize,
    ) -> Option<ByteSliceReference> {
        let mut field_names = FieldPath::new();
        let mut current = self.nodes[set_idx].parent;

        while let Some(node_idx) = current {
            let node = &self.nodes[node_idx];
            match node.kind {
                NodeKind::Field => field_names.push(lookup.field(node.node_ref).name),
                NodeKind::InlineFragment => {
                    if let Some(cond) = lookup.inline_fragment(node.node_ref).type_condition {
                        return resolve_type_name(lookup, lookup.type_name(cond), &field_names);
                    }
                },
                NodeKind::FragmentDefinition => {
                    let fragment = lookup.fragment_definition(node.node_ref);
                    return resolve_type_name(
                        lookup,
                        lookup.fragment_type_condition(fragment),
                        &field_names,
                    );
                },
                NodeKind::OperationDefinition => {
                    let operation = lookup.operation_definition(node.node_ref);
                    let root_type_name = lookup.root_operation_type_name(operation.operation_type)?;
                    return resolve_type_name(lookup, root_type_name, &field_names);
                },
                _ => (),
            }
            current = node.parent;
        }

        None
    }

    /// The schema definition of the field at node `field_idx`.
    pub fn field_definition<'doc>(
        &self,
        lookup: &Lookup<'doc>,
        field_idx: usize,
    ) -> Option<&'doc FieldDefinition> {
        let set_idx = self.nodes[field_idx].parent?;
        let type_name = self.selection_set_type_name(lookup, set_idx)?;
        let field = lookup.field(self.nodes[field_idx].node_ref);
        lookup.field_definition_by_name(lookup.fields_definition_of(type_name), field.name)
    }

    /// The argument definitions that apply to the argument set at node
    /// `argument_set_idx`: those of its field's definition or of its
    /// directive's definition.
    pub fn arguments_definition<'doc>(
        &self,
        lookup: &Lookup<'doc>,
        argument_set_idx: usize,
    ) -> Option<&'doc [Ref]> {
        let owner_idx = self.nodes[argument_set_idx].parent?;
        let owner = &self.nodes[owner_idx];
        match owner.kind {
            NodeKind::Field => self.field_definition(lookup, owner_idx)
                .map(|def| def.arguments_definition.as_slice()),
            NodeKind::Directive => {
                let directive = lookup.directive(owner.node_ref);
                lookup.directive_definition_by_name(directive.name)
                    .map(|def| def.arguments_definition.as_slice())
            },
            _ => None,
        }
    }

    /// Where the directive at node `directive_idx` is applied.
    pub fn directive_location(
        &self,
        lookup: &Lookup<'_>,
        directive_idx: usize,
    ) -> Option<DirectiveLocation> {
        let set_idx = self.nodes[directive_idx].parent?;
        let owner_idx = self.nodes[set_idx].parent?;
        let owner = &self.nodes[owner_idx];
        let location = match owner.kind {
            NodeKind::EnumTypeDefinition => DirectiveLocation::Enum,
            NodeKind::EnumValueDefinition => DirectiveLocation::EnumValue,
            NodeKind::Field => DirectiveLocation::Field,
            NodeKind::FieldDefinition => DirectiveLocation::FieldDefinition,
            NodeKind::FragmentDefinition => DirectiveLocation::FragmentDefinition,
            NodeKind::FragmentSpread => DirectiveLocation::FragmentSpread,
            NodeKind::InlineFragment => DirectiveLocation::InlineFragment,
            NodeKind::InputObjectTypeDefinition => DirectiveLocation::InputObject,
            NodeKind::InputValueDefinition => match self.parent(owner_idx)?.kind {
                NodeKind::InputObjectTypeDefinition => DirectiveLocation::InputFieldDefinition,
                _ => DirectiveLocation::ArgumentDefinition,
            },
            NodeKind::InterfaceTypeDefinition => DirectiveLocation::Interface,
            NodeKind::ObjectTypeDefinition => DirectiveLocation::Object,
            NodeKind::OperationDefinition => {
                match lookup.operation_definition(owner.node_ref).operation_type {
                    OperationType::Mutation => DirectiveLocation::Mutation,
                    OperationType::Query => DirectiveLocation::Query,
                    OperationType::Subscription => DirectiveLocation::Subscription,
                }
            },
            NodeKind::ScalarTypeDefinition => DirectiveLocation::Scalar,
            NodeKind::SchemaDefinition => DirectiveLocation::Schema,
            NodeKind::UnionTypeDefinition => DirectiveLocation::Union,
            NodeKind::Argument
            | NodeKind::ArgumentSet
            | NodeKind::Directive
            | NodeKind::DirectiveDefinition
            | NodeKind::DirectiveSet
            | NodeKind::SelectionSet => return None,
        };
        Some(location)
    }

    /// After [`Walker::walk_type_system_definition`], every field definition
    /// annotated with `@directive_name`.
    pub fn fields_containing_directive(
        &self,
        lookup: &Lookup<'_>,
        directive_name: &str,
    ) -> Vec<FieldDirective> {
        self.directives().iter()
            .filter_map(|directive_idx| {
                let directive_node = &self.nodes[*directive_idx];
                let directive = lookup.directive(directive_node.node_ref);
                if !lookup.name_is(directive.name, directive_name) {
                    return None;
                }
                let set_idx = directive_node.parent?;
                let field_idx = self.nodes[set_idx].parent?;
                let field_node = &self.nodes[field_idx];
                if field_node.kind != NodeKind::FieldDefinition {
                    return None;
                }
                let type_node = self.parent(field_idx)?;
                let type_name = match type_node.kind {
                    NodeKind::ObjectTypeDefinition =>
                        lookup.object_type_definition(type_node.node_ref).name,
                    NodeKind::InterfaceTypeDefinition =>
                        lookup.interface_type_definitions()[type_node.node_ref].name,
                    _ => return None,
                };
                Some(FieldDirective {
                    type_name,
                    field_definition: field_node.node_ref,
                    directive: directive_node.node_ref,
                })
            })
            .collect()
    }
}

/// Follows `field_names` (innermost first) down from `type_name` through
/// each field's declared type.
fn resolve_type_name(
    lookup: &Lookup<'_>,
    type_name: ByteSliceReference,
    field_names: &[ByteSliceReference],
) -> Option<ByteSliceReference> {
    let mut current = type_name;
    for field_name in field_names.iter().rev() {
        let field_type = lookup.field_type(current, *field_name)?;
        current = lookup.type_name(field_type);
    }
    Some(current)
}
