use crate::document::ByteSliceReference;
use crate::document::Ref;
use crate::document::Type;
use crate::lookup::Lookup;
use crate::lookup::lookup::BUILTIN_SCALARS;

impl<'doc> Lookup<'doc> {
    /// Strips `List` and `NonNull` wrappers until a `Named` type remains.
    pub fn unwrapped_named_type(&self, ty: Ref) -> Ref {
        let mut current = ty;
        while let Some(of_type) = self.ty(current).of_type() {
            current = of_type;
        }
        current
    }

    /// Name of the type `ty` refers to once unwrapped.
    pub fn type_name(&self, ty: Ref) -> ByteSliceReference {
        self.ty(self.unwrapped_named_type(ty))
            .name()
            .unwrap_or_default()
    }

    pub fn types_are_equal(&self, left: Ref, right: Ref) -> bool {
        match (self.ty(left), self.ty(right)) {
            (Type::Named(left), Type::Named(right)) =>
                self.bytes_equal(*left, *right),
            (Type::List(left), Type::List(right))
            | (Type::NonNull(left), Type::NonNull(right)) =>
                self.types_are_equal(*left, *right),
            _ => false,
        }
    }

    /// Whether a value of `usage_type` may flow into a position declared as
    /// `schema_type`.
    ///
    /// The only widening allowed is dropping a `NonNull`: `Boolean!` satisfies
    /// `Boolean` but `Boolean` does not satisfy `Boolean!`.
    pub fn type_satisfies_type_system_type(&self, schema_type: Ref, usage_type: Ref) -> bool {
        let usage_type = match (self.ty(schema_type), self.ty(usage_type)) {
            (Type::List(_) | Type::Named(_), Type::NonNull(inner)) => *inner,
            _ => usage_type,
        };
        match (self.ty(schema_type), self.ty(usage_type)) {
            (Type::Named(schema_name), Type::Named(usage_name)) =>
                self.bytes_equal(*schema_name, *usage_name),
            (Type::List(schema_inner), Type::List(usage_inner))
            | (Type::NonNull(schema_inner), Type::NonNull(usage_inner)) =>
                self.type_satisfies_type_system_type(*schema_inner, *usage_inner),
            _ => false,
        }
    }

    pub fn is_builtin_scalar(&self, name: ByteSliceReference) -> bool {
        BUILTIN_SCALARS.iter().any(|builtin| self.name_is(name, builtin))
    }

    pub fn is_scalar_type(&self, name: ByteSliceReference) -> bool {
        self.is_builtin_scalar(name)
            || self.scalar_type_definition_by_name(name).is_some()
    }

    /// Scalars and enums.
    pub fn is_leaf_type(&self, name: ByteSliceReference) -> bool {
        self.is_scalar_type(name)
            || self.enum_type_definition_by_name(name).is_some()
    }

    /// Scalars, enums and input objects.
    pub fn is_input_type(&self, name: ByteSliceReference) -> bool {
        self.is_leaf_type(name)
            || self.input_object_type_definition_by_name(name).is_some()
    }

    /// Objects, interfaces and unions: the types a fragment may be declared
    /// on.
    pub fn is_composite_type(&self, name: ByteSliceReference) -> bool {
        self.object_type_definition_by_name(name).is_some()
            || self.interface_type_definition_by_name(name).is_some()
            || self.union_type_definition_by_name(name).is_some()
    }

    /// Field definitions of an object or interface type. Unions and unknown
    /// types have none.
    pub fn fields_definition_of(&self, type_name: ByteSliceReference) -> &'doc [Ref] {
        if let Some(object_def) = self.object_type_definition_by_name(type_name) {
            return &object_def.fields_definition;
        }
        if let Some(iface_def) = self.interface_type_definition_by_name(type_name) {
            return &iface_def.fields_definition;
        }
        &[]
    }

    /// Declared type of `field_name` on the object or interface `type_name`.
    pub fn field_type(
        &self,
        type_name: ByteSliceReference,
        field_name: ByteSliceReference,
    ) -> Option<Ref> {
        self.field_definition_by_name(self.fields_definition_of(type_name), field_name)
            .map(|def| def.field_type)
    }

    pub fn union_contains_type(
        &self,
        union_name: ByteSliceReference,
        member_name: ByteSliceReference,
    ) -> bool {
        self.union_type_definition_by_name(union_name)
            .is_some_and(|def| self.names_contain(&def.member_types, member_name))
    }

    pub fn object_implements_interface(
        &self,
        object_name: ByteSliceReference,
        interface_name: ByteSliceReference,
    ) -> bool {
        self.object_type_definition_by_name(object_name)
            .is_some_and(|def| self.names_contain(&def.implements_interfaces, interface_name))
    }

    /// Collects into `possible_types` every type name a selection on
    /// `type_name` may spread into:
    ///
    /// * an object: itself, the interfaces it implements and the unions it
    ///   belongs to;
    /// * an interface: itself and the possible types of each implementing
    ///   object;
    /// * a union: itself, its members and each member's possible types.
    ///
    /// A type already in `possible_types` is not expanded again, so unions
    /// that list each other terminate.
    pub fn possible_selection_types(
        &self,
        type_name: ByteSliceReference,
        possible_types: &mut Vec<ByteSliceReference>,
    ) {
        if self.names_contain(possible_types, type_name) {
            return;
        }
        possible_types.push(type_name);

        if let Some(object_def) = self.object_type_definition_by_name(type_name) {
            possible_types.extend(object_def.implements_interfaces.iter().copied());
            for union_def in self.union_type_definitions() {
                if self.names_contain(&union_def.member_types, type_name) {
                    possible_types.push(union_def.name);
                }
            }
            return;
        }

        if self.interface_type_definition_by_name(type_name).is_some() {
            for object_def in self.object_type_definitions() {
                if self.names_contain(&object_def.implements_interfaces, type_name) {
                    self.possible_selection_types(object_def.name, possible_types);
                }
            }
            return;
        }

        if let Some(union_def) = self.union_type_definition_by_name(type_name) {
            for member in &union_def.member_types {
                self.possible_selection_types(*member, possible_types);
            }
        }
    }
}
