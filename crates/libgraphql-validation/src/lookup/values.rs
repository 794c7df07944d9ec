use crate::document::ByteSliceReference;
use crate::document::EnumTypeDefinition;
use crate::document::InputObjectTypeDefinition;
use crate::document::Ref;
use crate::document::Type;
use crate::document::Value;
use crate::lookup::Lookup;

impl<'doc> Lookup<'doc> {
    /// Whether `value` may be passed where `schema_type` is expected.
    ///
    /// Variables resolve through `variable_definitions` (the definitions of
    /// the operation the value is evaluated in). `input_value_has_default`
    /// tells whether the receiving argument or input field declares a
    /// default, which lets a nullable variable feed a `NonNull` position.
    pub fn value_is_valid(
        &self,
        value: Ref,
        schema_type: Ref,
        variable_definitions: &[Ref],
        input_value_has_default: bool,
    ) -> bool {
        if let Value::Variable(name) = self.value(value) {
            return self.variable_value_is_valid(
                *name,
                schema_type,
                variable_definitions,
                input_value_has_default,
            );
        }

        let (schema_type, non_null) = match self.ty(schema_type) {
            Type::NonNull(inner) => (*inner, true),
            Type::List(_) | Type::Named(_) => (schema_type, false),
        };

        match (self.value(value), self.ty(schema_type)) {
            (Value::Null, _) => !non_null,

            (Value::List(list), Type::List(item_type)) =>
                self.list_value(*list).iter().all(|item| {
                    self.value_is_valid(*item, *item_type, variable_definitions, false)
                }),

            (_, Type::List(_)) => false,

            (literal, Type::Named(type_name)) =>
                self.literal_is_valid(literal, *type_name, variable_definitions),

            // `NonNull(NonNull(_))` cannot be written in SDL.
            (_, Type::NonNull(_)) => false,
        }
    }

    fn variable_value_is_valid(
        &self,
        variable_name: ByteSliceReference,
        schema_type: Ref,
        variable_definitions: &[Ref],
        input_value_has_default: bool,
    ) -> bool {
        let Some(var_def) = self.variable_definition_by_name(variable_name, variable_definitions) else {
            return false;
        };

        let mut schema_type = schema_type;
        if let Type::NonNull(inner) = self.ty(schema_type) {
            let var_type_is_non_null = self.ty(var_def.var_type).is_non_null();
            if var_type_is_non_null
                || var_def.default_value.is_some()
                || input_value_has_default {
                schema_type = *inner;
            }
        }

        if !self.type_satisfies_type_system_type(schema_type, var_def.var_type) {
            return false;
        }

        match var_def.default_value {
            Some(default_value) => self.value_is_valid(
                default_value,
                schema_type,
                variable_definitions,
                input_value_has_default,
            ),
            None => true,
        }
    }

    fn literal_is_valid(
        &self,
        literal: &Value,
        type_name: ByteSliceReference,
        variable_definitions: &[Ref],
    ) -> bool {
        // Custom scalars define their own input coercion, which is out of
        // reach here.
        if !self.is_builtin_scalar(type_name)
            && self.scalar_type_definition_by_name(type_name).is_some() {
            return true;
        }

        match literal {
            Value::Boolean(_) => self.name_is(type_name, "Boolean"),
            Value::Enum(enum_value) => self.enum_type_definition_by_name(type_name)
                .is_some_and(|def| self.enum_contains_value(def, *enum_value)),
            Value::Float(_) => self.name_is(type_name, "Float"),
            Value::Int(_) =>
                self.name_is(type_name, "Int")
                    || self.name_is(type_name, "Float")
                    || self.name_is(type_name, "ID"),
            Value::Object(object) => self.input_object_type_definition_by_name(type_name)
                .is_some_and(|def| {
                    self.object_value_is_valid(self.object_value(*object), def, variable_definitions)
                }),
            Value::String(_) =>
                self.name_is(type_name, "String")
                    || self.name_is(type_name, "ID"),
            Value::List(_) | Value::Null | Value::Variable(_) => false,
        }
    }

    fn object_value_is_valid(
        &self,
        object_fields: &[Ref],
        def: &InputObjectTypeDefinition,
        variable_definitions: &[Ref],
    ) -> bool {
        for input_field_ref in &def.input_fields {
            let input_field = self.input_value_definition(*input_field_ref);
            let has_default = input_field.default_value.is_some();
            match self.object_field_by_name(object_fields, input_field.name) {
                Some(object_field) => {
                    if !self.value_is_valid(
                        object_field.value,
                        input_field.value_type,
                        variable_definitions,
                        has_default,
                    ) {
                        return false;
                    }
                },
                None => {
                    if self.ty(input_field.value_type).is_non_null() && !has_default {
                        return false;
                    }
                },
            }
        }

        for (idx, field_ref) in object_fields.iter().enumerate() {
            let field = self.object_field(*field_ref);
            if self.input_value_definition_by_name(&def.input_fields, field.name).is_none() {
                return false;
            }
            let repeated = object_fields[idx + 1..].iter().any(|other_ref| {
                self.bytes_equal(self.object_field(*other_ref).name, field.name)
            });
            if repeated {
                return false;
            }
        }

        true
    }

    pub fn enum_contains_value(
        &self,
        def: &EnumTypeDefinition,
        enum_value: ByteSliceReference,
    ) -> bool {
        !enum_value.is_empty()
            && def.values.iter().any(|value_ref| {
                self.bytes_equal(self.enum_value_definition(*value_ref).name, enum_value)
            })
    }

    /// Structural equality of two values. Lists compare item by item in
    /// order; objects compare field by field regardless of order.
    pub fn values_are_equal(&self, first: Ref, second: Ref) -> bool {
        match (self.value(first), self.value(second)) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Enum(a), Value::Enum(b))
            | (Value::String(a), Value::String(b))
            | (Value::Variable(a), Value::Variable(b)) => self.bytes_equal(*a, *b),
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::List(a), Value::List(b)) => {
                let (a, b) = (self.list_value(*a), self.list_value(*b));
                a.len() == b.len()
                    && a.iter().zip(b).all(|(a, b)| self.values_are_equal(*a, *b))
            },
            (Value::Object(a), Value::Object(b)) => {
                let (a, b) = (self.object_value(*a), self.object_value(*b));
                a.len() == b.len() && a.iter().all(|field_ref| {
                    let field = self.object_field(*field_ref);
                    self.object_field_by_name(b, field.name)
                        .is_some_and(|other| self.values_are_equal(field.value, other.value))
                })
            },
            _ => false,
        }
    }

    /// Whether two argument sets pass the same arguments, in any order.
    pub fn arguments_are_equal(&self, first: &[Ref], second: &[Ref]) -> bool {
        first.len() == second.len() && first.iter().all(|arg_ref| {
            let arg = self.argument(*arg_ref);
            self.argument_by_name(second, arg.name)
                .is_some_and(|other| self.values_are_equal(arg.value, other.value))
        })
    }

    /// Appends the name of every variable referenced anywhere inside
    /// `value` to `variables`.
    pub fn collect_variables(&self, value: Ref, variables: &mut Vec<ByteSliceReference>) {
        match self.value(value) {
            Value::Variable(name) => variables.push(*name),
            Value::List(list) => {
                for item in self.list_value(*list) {
                    self.collect_variables(*item, variables);
                }
            },
            Value::Object(object) => {
                for field_ref in self.object_value(*object) {
                    self.collect_variables(self.object_field(*field_ref).value, variables);
                }
            },
            Value::Boolean(_)
            | Value::Enum(_)
            | Value::Float(_)
            | Value::Int(_)
            | Value::Null
            | Value::String(_) => (),
        }
    }

    pub fn value_contains_variable(&self, value: Ref) -> bool {
        match self.value(value) {
            Value::Variable(_) => true,
            Value::List(list) => self.list_value(*list).iter()
                .any(|item| self.value_contains_variable(*item)),
            Value::Object(object) => self.object_value(*object).iter()
                .any(|field_ref| self.value_contains_variable(self.object_field(*field_ref).value)),
            _ => false,
        }
    }
}
