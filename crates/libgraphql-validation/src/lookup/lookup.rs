use crate::document::Argument;
use crate::document::ByteSliceReference;
use crate::document::Directive;
use crate::document::DirectiveDefinition;
use crate::document::Document;
use crate::document::EnumTypeDefinition;
use crate::document::EnumValueDefinition;
use crate::document::Field;
use crate::document::FieldDefinition;
use crate::document::FragmentDefinition;
use crate::document::FragmentSpread;
use crate::document::InlineFragment;
use crate::document::InputObjectTypeDefinition;
use crate::document::InputValueDefinition;
use crate::document::InterfaceTypeDefinition;
use crate::document::ObjectField;
use crate::document::ObjectTypeDefinition;
use crate::document::OperationDefinition;
use crate::document::OperationType;
use crate::document::Ref;
use crate::document::ScalarTypeDefinition;
use crate::document::SelectionSet;
use crate::document::Type;
use crate::document::UnionTypeDefinition;
use crate::document::Value;
use crate::document::VariableDefinition;
use crate::lookup::IndexPool;

/// Scalars every schema has, whether or not its SDL declares them.
pub(crate) const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

static EMPTY_SELECTION_SET: SelectionSet = SelectionSet {
    fields: Vec::new(),
    inline_fragments: Vec::new(),
    fragment_spreads: Vec::new(),
};

/// Read access to a [`Document`] plus the semantic queries the validation
/// rules are built from.
///
/// A `Lookup` borrows its document immutably. Its only state is an
/// [`IndexPool`] of scratch buffers, so it is cheap to create and must not
/// be shared across threads.
#[derive(Debug)]
pub struct Lookup<'doc> {
    doc: &'doc Document,
    pub(crate) pool: IndexPool,
}
impl<'doc> Lookup<'doc> {
    pub fn new(doc: &'doc Document) -> Self {
        Self {
            doc,
            pool: IndexPool::new(),
        }
    }

    pub fn document(&self) -> &'doc Document {
        self.doc
    }

    pub fn index_pool(&self) -> &IndexPool {
        &self.pool
    }

    pub fn bytes(&self, reference: ByteSliceReference) -> &'doc [u8] {
        self.doc.interner.get(reference)
    }

    /// The referenced text as UTF-8. Interned text always comes from `&str`
    /// sources, so the empty fallback is never hit for lowered documents.
    pub fn str(&self, reference: ByteSliceReference) -> &'doc str {
        std::str::from_utf8(self.bytes(reference)).unwrap_or_default()
    }

    /// Compares two references by content.
    pub fn bytes_equal(&self, a: ByteSliceReference, b: ByteSliceReference) -> bool {
        self.bytes(a) == self.bytes(b)
    }

    pub fn name_is(&self, reference: ByteSliceReference, name: &str) -> bool {
        self.bytes(reference) == name.as_bytes()
    }

    pub fn names_contain(
        &self,
        names: &[ByteSliceReference],
        name: ByteSliceReference,
    ) -> bool {
        names.iter().any(|candidate| self.bytes_equal(*candidate, name))
    }

    pub fn has_operation_definitions(&self) -> bool {
        !self.doc.operation_definitions.is_empty()
    }

    pub fn has_fragment_definitions(&self) -> bool {
        !self.doc.fragment_definitions.is_empty()
    }

    // -- Executable entities --------------------------------------------------

    pub fn value(&self, value: Ref) -> &'doc Value {
        &self.doc.values[value]
    }

    pub fn list_value(&self, list: Ref) -> &'doc [Ref] {
        &self.doc.list_values[list]
    }

    pub fn object_value(&self, object: Ref) -> &'doc [Ref] {
        &self.doc.object_values[object]
    }

    pub fn object_field(&self, field: Ref) -> &'doc ObjectField {
        &self.doc.object_fields[field]
    }

    pub fn ty(&self, ty: Ref) -> &'doc Type {
        &self.doc.types[ty]
    }

    pub fn argument(&self, argument: Ref) -> &'doc Argument {
        &self.doc.arguments[argument]
    }

    pub fn argument_set(&self, set: Option<Ref>) -> &'doc [Ref] {
        match set {
            Some(set) => &self.doc.argument_sets[set],
            None => &[],
        }
    }

    pub fn directive(&self, directive: Ref) -> &'doc Directive {
        &self.doc.directives[directive]
    }

    pub fn directive_set(&self, set: Option<Ref>) -> &'doc [Ref] {
        match set {
            Some(set) => &self.doc.directive_sets[set],
            None => &[],
        }
    }

    /// The referenced selection set, or an empty one when absent.
    pub fn selection_set(&self, set: Option<Ref>) -> &'doc SelectionSet {
        match set {
            Some(set) => &self.doc.selection_sets[set],
            None => &EMPTY_SELECTION_SET,
        }
    }

    pub fn field(&self, field: Ref) -> &'doc Field {
        &self.doc.fields[field]
    }

    pub fn inline_fragment(&self, fragment: Ref) -> &'doc InlineFragment {
        &self.doc.inline_fragments[fragment]
    }

    pub fn fragment_spread(&self, spread: Ref) -> &'doc FragmentSpread {
        &self.doc.fragment_spreads[spread]
    }

    pub fn fragment_spreads(&self) -> &'doc [FragmentSpread] {
        &self.doc.fragment_spreads
    }

    pub fn fragment_definition(&self, fragment: Ref) -> &'doc FragmentDefinition {
        &self.doc.fragment_definitions[fragment]
    }

    pub fn fragment_definitions(&self) -> &'doc [FragmentDefinition] {
        &self.doc.fragment_definitions
    }

    pub fn fragment_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<(Ref, &'doc FragmentDefinition)> {
        self.doc.fragment_definitions.iter()
            .enumerate()
            .find(|(_, def)| self.bytes_equal(def.name, name))
    }

    /// Name of a fragment's type condition.
    pub fn fragment_type_condition(&self, fragment: &FragmentDefinition) -> ByteSliceReference {
        self.type_name(fragment.type_condition)
    }

    pub fn operation_definition(&self, operation: Ref) -> &'doc OperationDefinition {
        &self.doc.operation_definitions[operation]
    }

    pub fn operation_definitions(&self) -> &'doc [OperationDefinition] {
        &self.doc.operation_definitions
    }

    pub fn variable_definition(&self, variable: Ref) -> &'doc VariableDefinition {
        &self.doc.variable_definitions[variable]
    }

    /// Finds the definition of `$name` among `variable_definitions`.
    pub fn variable_definition_by_name(
        &self,
        name: ByteSliceReference,
        variable_definitions: &[Ref],
    ) -> Option<&'doc VariableDefinition> {
        variable_definitions.iter()
            .map(|var_ref| self.variable_definition(*var_ref))
            .find(|def| self.bytes_equal(def.variable, name))
    }

    pub fn argument_by_name(
        &self,
        arguments: &[Ref],
        name: ByteSliceReference,
    ) -> Option<&'doc Argument> {
        arguments.iter()
            .map(|arg_ref| self.argument(*arg_ref))
            .find(|arg| self.bytes_equal(arg.name, name))
    }

    pub fn object_field_by_name(
        &self,
        fields: &[Ref],
        name: ByteSliceReference,
    ) -> Option<&'doc ObjectField> {
        fields.iter()
            .map(|field_ref| self.object_field(*field_ref))
            .find(|field| self.bytes_equal(field.name, name))
    }

    // -- Type-system entities -------------------------------------------------

    pub fn object_type_definitions(&self) -> &'doc [ObjectTypeDefinition] {
        &self.doc.object_type_definitions
    }

    pub fn object_type_definition(&self, def: Ref) -> &'doc ObjectTypeDefinition {
        &self.doc.object_type_definitions[def]
    }

    pub fn object_type_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc ObjectTypeDefinition> {
        self.doc.object_type_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn interface_type_definitions(&self) -> &'doc [InterfaceTypeDefinition] {
        &self.doc.interface_type_definitions
    }

    pub fn interface_type_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc InterfaceTypeDefinition> {
        self.doc.interface_type_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn union_type_definitions(&self) -> &'doc [UnionTypeDefinition] {
        &self.doc.union_type_definitions
    }

    pub fn union_type_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc UnionTypeDefinition> {
        self.doc.union_type_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn enum_type_definitions(&self) -> &'doc [EnumTypeDefinition] {
        &self.doc.enum_type_definitions
    }

    pub fn enum_type_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc EnumTypeDefinition> {
        self.doc.enum_type_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn enum_value_definition(&self, def: Ref) -> &'doc EnumValueDefinition {
        &self.doc.enum_value_definitions[def]
    }

    pub fn scalar_type_definitions(&self) -> &'doc [ScalarTypeDefinition] {
        &self.doc.scalar_type_definitions
    }

    pub fn scalar_type_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc ScalarTypeDefinition> {
        self.doc.scalar_type_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn input_object_type_definitions(&self) -> &'doc [InputObjectTypeDefinition] {
        &self.doc.input_object_type_definitions
    }

    pub fn input_object_type_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc InputObjectTypeDefinition> {
        self.doc.input_object_type_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn field_definition(&self, def: Ref) -> &'doc FieldDefinition {
        &self.doc.field_definitions[def]
    }

    pub fn field_definition_by_name(
        &self,
        fields_definition: &[Ref],
        name: ByteSliceReference,
    ) -> Option<&'doc FieldDefinition> {
        fields_definition.iter()
            .map(|def_ref| self.field_definition(*def_ref))
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn input_value_definition(&self, def: Ref) -> &'doc InputValueDefinition {
        &self.doc.input_value_definitions[def]
    }

    pub fn input_value_definition_by_name(
        &self,
        input_value_definitions: &[Ref],
        name: ByteSliceReference,
    ) -> Option<&'doc InputValueDefinition> {
        input_value_definitions.iter()
            .map(|def_ref| self.input_value_definition(*def_ref))
            .find(|def| self.bytes_equal(def.name, name))
    }

    pub fn directive_definitions(&self) -> &'doc [DirectiveDefinition] {
        &self.doc.directive_definitions
    }

    pub fn directive_definition_by_name(
        &self,
        name: ByteSliceReference,
    ) -> Option<&'doc DirectiveDefinition> {
        self.doc.directive_definitions.iter()
            .find(|def| self.bytes_equal(def.name, name))
    }

    /// Name of the object type rooting operations of `operation_type`.
    ///
    /// With a `schema { ... }` definition that is whatever it names (and
    /// `None` when it names nothing for this operation type). Without one it
    /// is the object type called `Query`, `Mutation` or `Subscription`, if
    /// declared.
    pub fn root_operation_type_name(
        &self,
        operation_type: OperationType,
    ) -> Option<ByteSliceReference> {
        match &self.doc.schema_definition {
            Some(schema_def) => match operation_type {
                OperationType::Mutation => schema_def.mutation,
                OperationType::Query => schema_def.query,
                OperationType::Subscription => schema_def.subscription,
            },
            None => {
                let default_name = operation_type.default_root_type_name();
                self.doc.object_type_definitions.iter()
                    .find(|def| self.name_is(def.name, default_name))
                    .map(|def| def.name)
            },
        }
    }

    pub fn root_operation_type_definition(
        &self,
        operation_type: OperationType,
    ) -> Option<&'doc ObjectTypeDefinition> {
        self.root_operation_type_name(operation_type)
            .and_then(|name| self.object_type_definition_by_name(name))
    }
}
