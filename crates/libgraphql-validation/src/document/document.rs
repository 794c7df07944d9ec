use crate::document::Argument;
use crate::document::ByteSliceReference;
use crate::document::Directive;
use crate::document::DirectiveDefinition;
use crate::document::EnumTypeDefinition;
use crate::document::EnumValueDefinition;
use crate::document::Field;
use crate::document::FieldDefinition;
use crate::document::FragmentDefinition;
use crate::document::FragmentSpread;
use crate::document::InlineFragment;
use crate::document::InputObjectTypeDefinition;
use crate::document::InputValueDefinition;
use crate::document::Interner;
use crate::document::InterfaceTypeDefinition;
use crate::document::ObjectField;
use crate::document::ObjectTypeDefinition;
use crate::document::OperationDefinition;
use crate::document::Ref;
use crate::document::ScalarTypeDefinition;
use crate::document::SchemaDefinition;
use crate::document::SelectionSet;
use crate::document::Type;
use crate::document::UnionTypeDefinition;
use crate::document::Value;
use crate::document::VariableDefinition;

/// Arena holding a type-system document and (optionally) one executable
/// document lowered on top of it.
///
/// Every entity kind lives in its own flat table and refers to others by
/// [`Ref`] index. All text lives in a single [`Interner`] and is referred to
/// by [`ByteSliceReference`]. Type-system text must be parsed before any
/// executable text so that [`Document::reset_executable`] can drop the
/// executable part on its own.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub(crate) interner: Interner,

    pub(crate) values: Vec<Value>,
    pub(crate) list_values: Vec<Vec<Ref>>,
    pub(crate) object_values: Vec<Vec<Ref>>,
    pub(crate) object_fields: Vec<ObjectField>,
    pub(crate) types: Vec<Type>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) argument_sets: Vec<Vec<Ref>>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) directive_sets: Vec<Vec<Ref>>,

    pub(crate) selection_sets: Vec<SelectionSet>,
    pub(crate) fields: Vec<Field>,
    pub(crate) inline_fragments: Vec<InlineFragment>,
    pub(crate) fragment_spreads: Vec<FragmentSpread>,
    pub(crate) fragment_definitions: Vec<FragmentDefinition>,
    pub(crate) operation_definitions: Vec<OperationDefinition>,
    pub(crate) variable_definitions: Vec<VariableDefinition>,

    pub(crate) schema_definition: Option<SchemaDefinition>,
    pub(crate) object_type_definitions: Vec<ObjectTypeDefinition>,
    pub(crate) interface_type_definitions: Vec<InterfaceTypeDefinition>,
    pub(crate) union_type_definitions: Vec<UnionTypeDefinition>,
    pub(crate) enum_type_definitions: Vec<EnumTypeDefinition>,
    pub(crate) enum_value_definitions: Vec<EnumValueDefinition>,
    pub(crate) scalar_type_definitions: Vec<ScalarTypeDefinition>,
    pub(crate) input_object_type_definitions: Vec<InputObjectTypeDefinition>,
    pub(crate) field_definitions: Vec<FieldDefinition>,
    pub(crate) input_value_definitions: Vec<InputValueDefinition>,
    pub(crate) directive_definitions: Vec<DirectiveDefinition>,

    #[serde(skip)]
    pub(crate) executable_watermark: Option<Watermark>,
}
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_executable_definitions(&self) -> bool {
        !self.operation_definitions.is_empty()
            || !self.fragment_definitions.is_empty()
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Interns `bytes` and returns a reference to them. Used to add names
    /// and literals that did not come from parsed source text.
    pub fn put_literal_bytes(&mut self, bytes: &[u8]) -> ByteSliceReference {
        self.interner.put(bytes)
    }

    pub fn put_value(&mut self, value: Value) -> Ref {
        self.values.push(value);
        self.values.len() - 1
    }

    /// Appends an argument to `field`'s argument set, creating the set if the
    /// field had none. Returns the new argument's index.
    pub fn add_field_argument(
        &mut self,
        field: Ref,
        name: ByteSliceReference,
        value: Ref,
    ) -> Ref {
        let position = self.fields[field].position;
        self.arguments.push(Argument { name, value, position });
        let argument = self.arguments.len() - 1;

        match self.fields[field].argument_set {
            Some(set) => self.argument_sets[set].push(argument),
            None => {
                self.argument_sets.push(vec![argument]);
                self.fields[field].argument_set = Some(self.argument_sets.len() - 1);
            },
        }
        argument
    }

    /// Drops everything added since the first executable document was
    /// parsed, leaving the type-system part intact for reuse with another
    /// request.
    pub fn reset_executable(&mut self) {
        let Some(mark) = self.executable_watermark.take() else {
            return;
        };
        self.interner.truncate(mark.interner);
        self.values.truncate(mark.values);
        self.list_values.truncate(mark.list_values);
        self.object_values.truncate(mark.object_values);
        self.object_fields.truncate(mark.object_fields);
        self.types.truncate(mark.types);
        self.arguments.truncate(mark.arguments);
        self.argument_sets.truncate(mark.argument_sets);
        self.directives.truncate(mark.directives);
        self.directive_sets.truncate(mark.directive_sets);
        self.selection_sets.clear();
        self.fields.clear();
        self.inline_fragments.clear();
        self.fragment_spreads.clear();
        self.fragment_definitions.clear();
        self.operation_definitions.clear();
        self.variable_definitions.clear();
    }

    pub(crate) fn mark_executable_start(&mut self) {
        if self.executable_watermark.is_none() {
            self.executable_watermark = Some(Watermark {
                interner: self.interner.len(),
                values: self.values.len(),
                list_values: self.list_values.len(),
                object_values: self.object_values.len(),
                object_fields: self.object_fields.len(),
                types: self.types.len(),
                arguments: self.arguments.len(),
                argument_sets: self.argument_sets.len(),
                directives: self.directives.len(),
                directive_sets: self.directive_sets.len(),
            });
        }
    }

    pub(crate) fn push_type(&mut self, ty: Type) -> Ref {
        self.types.push(ty);
        self.types.len() - 1
    }

    pub(crate) fn push_directive_set(
        &mut self,
        directives: Vec<Ref>,
    ) -> Option<Ref> {
        if directives.is_empty() {
            return None;
        }
        self.directive_sets.push(directives);
        Some(self.directive_sets.len() - 1)
    }

    pub(crate) fn push_argument_set(
        &mut self,
        arguments: Vec<Ref>,
    ) -> Option<Ref> {
        if arguments.is_empty() {
            return None;
        }
        self.argument_sets.push(arguments);
        Some(self.argument_sets.len() - 1)
    }

    pub(crate) fn push_selection_set(&mut self, set: SelectionSet) -> Option<Ref> {
        if !set.has_selections() {
            return None;
        }
        self.selection_sets.push(set);
        Some(self.selection_sets.len() - 1)
    }
}

/// Table lengths recorded when the first executable definition is lowered.
#[derive(Clone, Debug)]
pub(crate) struct Watermark {
    interner: usize,
    values: usize,
    list_values: usize,
    object_values: usize,
    object_fields: usize,
    types: usize,
    arguments: usize,
    argument_sets: usize,
    directives: usize,
    directive_sets: usize,
}
