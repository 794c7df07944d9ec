use crate::ast;
use crate::document::Argument;
use crate::document::ByteSliceReference;
use crate::document::Directive;
use crate::document::DirectiveDefinition;
use crate::document::Document;
use crate::document::DocumentBuildError;
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
use crate::document::SchemaDefinition;
use crate::document::SelectionSet;
use crate::document::Type;
use crate::document::UnionTypeDefinition;
use crate::document::Value;
use crate::document::VariableDefinition;
use crate::file_reader;
use crate::loc::Position;
use std::path::Path;

type Result<T> = std::result::Result<T, DocumentBuildError>;

impl Document {
    /// Parses `sdl` and lowers every schema, type and directive definition
    /// it contains into this document's tables.
    pub fn parse_type_system_definition(&mut self, sdl: &str) -> Result<()> {
        let ast_doc = ast::schema::parse(sdl)?;
        for def in &ast_doc.definitions {
            match def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.lower_schema_definition(schema_def)?,

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.lower_type_definition(type_def)?,

                ast::schema::Definition::TypeExtension(type_ext) => {
                    let (type_name, pos) = type_extension_name_and_pos(type_ext);
                    return Err(DocumentBuildError::UnsupportedTypeExtension {
                        type_name: type_name.to_string(),
                        line: pos.line,
                        col: pos.column,
                    });
                },

                ast::schema::Definition::DirectiveDefinition(directive_def) =>
                    self.lower_directive_definition(directive_def)?,
            }
        }
        log::trace!(
            "Lowered {} type-system definitions ({} object types, {} directives).",
            ast_doc.definitions.len(),
            self.object_type_definitions.len(),
            self.directive_definitions.len(),
        );
        Ok(())
    }

    pub fn parse_type_system_file<P: AsRef<Path>>(&mut self, file_path: P) -> Result<()> {
        let content = file_reader::read_content(file_path)?;
        self.parse_type_system_definition(content.as_str())
    }

    /// Parses `query` and lowers its operations and fragments into this
    /// document's tables.
    pub fn parse_executable_definition(&mut self, query: &str) -> Result<()> {
        let ast_doc = ast::operation::parse(query)?;
        self.mark_executable_start();
        for def in &ast_doc.definitions {
            match def {
                ast::operation::Definition::Operation(op_def) =>
                    self.lower_operation_definition(op_def)?,

                ast::operation::Definition::Fragment(frag_def) =>
                    self.lower_fragment_definition(frag_def)?,
            }
        }
        log::trace!(
            "Lowered executable document with {} operations and {} fragments.",
            self.operation_definitions.len(),
            self.fragment_definitions.len(),
        );
        Ok(())
    }

    pub fn parse_executable_file<P: AsRef<Path>>(&mut self, file_path: P) -> Result<()> {
        let content = file_reader::read_content(file_path)?;
        self.parse_executable_definition(content.as_str())
    }

    fn name(&mut self, name: &str) -> ByteSliceReference {
        self.interner.put(name.as_bytes())
    }

    fn lower_schema_definition(
        &mut self,
        schema_def: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let directive_set = self.lower_directives(&schema_def.directives, schema_def.position)?;
        let query = schema_def.query.as_deref().map(|name| self.name(name));
        let mutation = schema_def.mutation.as_deref().map(|name| self.name(name));
        let subscription = schema_def.subscription.as_deref().map(|name| self.name(name));
        self.schema_definition = Some(SchemaDefinition {
            query,
            mutation,
            subscription,
            directive_set,
            position: Position::from_pos(schema_def.position),
        });
        Ok(())
    }

    fn lower_type_definition(
        &mut self,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        match type_def {
            ast::schema::TypeDefinition::Enum(enum_type) => {
                let mut values = Vec::with_capacity(enum_type.values.len());
                for value in &enum_type.values {
                    let directive_set = self.lower_directives(&value.directives, value.position)?;
                    let name = self.name(value.name.as_str());
                    self.enum_value_definitions.push(EnumValueDefinition {
                        name,
                        directive_set,
                        position: Position::from_pos(value.position),
                    });
                    values.push(self.enum_value_definitions.len() - 1);
                }
                let directive_set = self.lower_directives(&enum_type.directives, enum_type.position)?;
                let name = self.name(enum_type.name.as_str());
                self.enum_type_definitions.push(EnumTypeDefinition {
                    name,
                    values,
                    directive_set,
                    position: Position::from_pos(enum_type.position),
                });
            },

            ast::schema::TypeDefinition::InputObject(input_type) => {
                let input_fields = self.lower_input_values(&input_type.fields)?;
                let directive_set = self.lower_directives(&input_type.directives, input_type.position)?;
                let name = self.name(input_type.name.as_str());
                self.input_object_type_definitions.push(InputObjectTypeDefinition {
                    name,
                    input_fields,
                    directive_set,
                    position: Position::from_pos(input_type.position),
                });
            },

            ast::schema::TypeDefinition::Interface(iface_type) => {
                let fields_definition = self.lower_field_definitions(&iface_type.fields)?;
                let implements_interfaces = iface_type.implements_interfaces.iter()
                    .map(|name| self.name(name.as_str()))
                    .collect();
                let directive_set = self.lower_directives(&iface_type.directives, iface_type.position)?;
                let name = self.name(iface_type.name.as_str());
                self.interface_type_definitions.push(InterfaceTypeDefinition {
                    name,
                    implements_interfaces,
                    fields_definition,
                    directive_set,
                    position: Position::from_pos(iface_type.position),
                });
            },

            ast::schema::TypeDefinition::Object(obj_type) => {
                let fields_definition = self.lower_field_definitions(&obj_type.fields)?;
                let implements_interfaces = obj_type.implements_interfaces.iter()
                    .map(|name| self.name(name.as_str()))
                    .collect();
                let directive_set = self.lower_directives(&obj_type.directives, obj_type.position)?;
                let name = self.name(obj_type.name.as_str());
                self.object_type_definitions.push(ObjectTypeDefinition {
                    name,
                    implements_interfaces,
                    fields_definition,
                    directive_set,
                    position: Position::from_pos(obj_type.position),
                });
            },

            ast::schema::TypeDefinition::Scalar(scalar_type) => {
                let directive_set = self.lower_directives(&scalar_type.directives, scalar_type.position)?;
                let name = self.name(scalar_type.name.as_str());
                self.scalar_type_definitions.push(ScalarTypeDefinition {
                    name,
                    directive_set,
                    position: Position::from_pos(scalar_type.position),
                });
            },

            ast::schema::TypeDefinition::Union(union_type) => {
                let member_types = union_type.types.iter()
                    .map(|name| self.name(name.as_str()))
                    .collect();
                let directive_set = self.lower_directives(&union_type.directives, union_type.position)?;
                let name = self.name(union_type.name.as_str());
                self.union_type_definitions.push(UnionTypeDefinition {
                    name,
                    member_types,
                    directive_set,
                    position: Position::from_pos(union_type.position),
                });
            },
        }
        Ok(())
    }

    fn lower_directive_definition(
        &mut self,
        directive_def: &ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let arguments_definition = self.lower_input_values(&directive_def.arguments)?;
        let name = self.name(directive_def.name.as_str());
        self.directive_definitions.push(DirectiveDefinition {
            name,
            arguments_definition,
            locations: directive_def.locations.iter().map(Into::into).collect(),
            repeatable: directive_def.repeatable,
            position: Position::from_pos(directive_def.position),
        });
        Ok(())
    }

    fn lower_field_definitions(
        &mut self,
        fields: &[ast::schema::Field],
    ) -> Result<Vec<Ref>> {
        let mut refs = Vec::with_capacity(fields.len());
        for field in fields {
            let arguments_definition = self.lower_input_values(&field.arguments)?;
            let field_type = self.lower_type(&field.field_type);
            let directive_set = self.lower_directives(&field.directives, field.position)?;
            let name = self.name(field.name.as_str());
            self.field_definitions.push(FieldDefinition {
                name,
                arguments_definition,
                field_type,
                directive_set,
                position: Position::from_pos(field.position),
            });
            refs.push(self.field_definitions.len() - 1);
        }
        Ok(refs)
    }

    fn lower_input_values(
        &mut self,
        input_values: &[ast::schema::InputValue],
    ) -> Result<Vec<Ref>> {
        let mut refs = Vec::with_capacity(input_values.len());
        for input_value in input_values {
            let value_type = self.lower_type(&input_value.value_type);
            let default_value = match &input_value.default_value {
                Some(value) => Some(self.lower_value(value, input_value.position)?),
                None => None,
            };
            let directive_set = self.lower_directives(&input_value.directives, input_value.position)?;
            let name = self.name(input_value.name.as_str());
            self.input_value_definitions.push(InputValueDefinition {
                name,
                value_type,
                default_value,
                directive_set,
                position: Position::from_pos(input_value.position),
            });
            refs.push(self.input_value_definitions.len() - 1);
        }
        Ok(refs)
    }

    fn lower_operation_definition(
        &mut self,
        op_def: &ast::operation::OperationDefinition,
    ) -> Result<()> {
        use ast::operation::OperationDefinition as AstOp;
        let (operation_type, position, name, variable_definitions, directives, selection_set) =
            match op_def {
                AstOp::SelectionSet(set) => (
                    OperationType::Query,
                    set.span.0,
                    None,
                    &[][..],
                    &[][..],
                    set,
                ),
                AstOp::Query(query) => (
                    OperationType::Query,
                    query.position,
                    query.name.as_deref(),
                    &query.variable_definitions[..],
                    &query.directives[..],
                    &query.selection_set,
                ),
                AstOp::Mutation(mutation) => (
                    OperationType::Mutation,
                    mutation.position,
                    mutation.name.as_deref(),
                    &mutation.variable_definitions[..],
                    &mutation.directives[..],
                    &mutation.selection_set,
                ),
                AstOp::Subscription(subscription) => (
                    OperationType::Subscription,
                    subscription.position,
                    subscription.name.as_deref(),
                    &subscription.variable_definitions[..],
                    &subscription.directives[..],
                    &subscription.selection_set,
                ),
            };

        let mut var_refs = Vec::with_capacity(variable_definitions.len());
        for var_def in variable_definitions {
            var_refs.push(self.lower_variable_definition(var_def)?);
        }
        let directive_set = self.lower_directives(directives, position)?;
        let selection_set = self.lower_selection_set(selection_set)?;
        let name = name.map(|name| self.name(name));
        self.operation_definitions.push(OperationDefinition {
            operation_type,
            name,
            variable_definitions: var_refs,
            directive_set,
            selection_set,
            position: Position::from_pos(position),
        });
        Ok(())
    }

    fn lower_variable_definition(
        &mut self,
        var_def: &ast::operation::VariableDefinition,
    ) -> Result<Ref> {
        let var_type = self.lower_type(&var_def.var_type);
        let default_value = match &var_def.default_value {
            Some(value) => Some(self.lower_value(value, var_def.position)?),
            None => None,
        };
        let variable = self.name(var_def.name.as_str());
        self.variable_definitions.push(VariableDefinition {
            variable,
            var_type,
            default_value,
            position: Position::from_pos(var_def.position),
        });
        Ok(self.variable_definitions.len() - 1)
    }

    fn lower_fragment_definition(
        &mut self,
        frag_def: &ast::operation::FragmentDefinition,
    ) -> Result<()> {
        let ast::operation::TypeCondition::On(type_name) = &frag_def.type_condition;
        let type_name = self.name(type_name.as_str());
        let type_condition = self.push_type(Type::Named(type_name));
        let directive_set = self.lower_directives(&frag_def.directives, frag_def.position)?;
        let selection_set = self.lower_selection_set(&frag_def.selection_set)?;
        let name = self.name(frag_def.name.as_str());
        self.fragment_definitions.push(FragmentDefinition {
            name,
            type_condition,
            directive_set,
            selection_set,
            position: Position::from_pos(frag_def.position),
        });
        Ok(())
    }

    fn lower_selection_set(
        &mut self,
        set: &ast::operation::SelectionSet,
    ) -> Result<Option<Ref>> {
        let mut lowered = SelectionSet::default();
        for selection in &set.items {
            match selection {
                ast::operation::Selection::Field(field) =>
                    lowered.fields.push(self.lower_field(field)?),

                ast::operation::Selection::FragmentSpread(spread) => {
                    let directive_set = self.lower_directives(&spread.directives, spread.position)?;
                    let fragment_name = self.name(spread.fragment_name.as_str());
                    self.fragment_spreads.push(FragmentSpread {
                        fragment_name,
                        directive_set,
                        position: Position::from_pos(spread.position),
                    });
                    lowered.fragment_spreads.push(self.fragment_spreads.len() - 1);
                },

                ast::operation::Selection::InlineFragment(inline) => {
                    let type_condition = inline.type_condition.as_ref().map(|cond| {
                        let ast::operation::TypeCondition::On(type_name) = cond;
                        let type_name = self.name(type_name.as_str());
                        self.push_type(Type::Named(type_name))
                    });
                    let directive_set = self.lower_directives(&inline.directives, inline.position)?;
                    let selection_set = self.lower_selection_set(&inline.selection_set)?;
                    self.inline_fragments.push(InlineFragment {
                        type_condition,
                        directive_set,
                        selection_set,
                        position: Position::from_pos(inline.position),
                    });
                    lowered.inline_fragments.push(self.inline_fragments.len() - 1);
                },
            }
        }
        Ok(self.push_selection_set(lowered))
    }

    fn lower_field(&mut self, field: &ast::operation::Field) -> Result<Ref> {
        let argument_set = self.lower_arguments(&field.arguments, field.position)?;
        let directive_set = self.lower_directives(&field.directives, field.position)?;
        let selection_set = self.lower_selection_set(&field.selection_set)?;
        let alias = field.alias.as_deref().map(|alias| self.name(alias));
        let name = self.name(field.name.as_str());
        self.fields.push(Field {
            alias,
            name,
            argument_set,
            directive_set,
            selection_set,
            position: Position::from_pos(field.position),
        });
        Ok(self.fields.len() - 1)
    }

    fn lower_arguments(
        &mut self,
        arguments: &[(String, ast::Value)],
        owner_pos: ast::AstPos,
    ) -> Result<Option<Ref>> {
        let mut refs = Vec::with_capacity(arguments.len());
        for (name, value) in arguments {
            let value = self.lower_value(value, owner_pos)?;
            let name = self.name(name.as_str());
            self.arguments.push(Argument {
                name,
                value,
                position: Position::from_pos(owner_pos),
            });
            refs.push(self.arguments.len() - 1);
        }
        Ok(self.push_argument_set(refs))
    }

    fn lower_directives(
        &mut self,
        directives: &[ast::Directive],
        owner_pos: ast::AstPos,
    ) -> Result<Option<Ref>> {
        let mut refs = Vec::with_capacity(directives.len());
        for directive in directives {
            let argument_set = self.lower_arguments(&directive.arguments, directive.position)?;
            let name = self.name(directive.name.as_str());
            self.directives.push(Directive {
                name,
                argument_set,
                position: Position::from_pos(directive.position),
            });
            refs.push(self.directives.len() - 1);
        }
        log::trace!("Lowered {} directives at {}:{}.", refs.len(), owner_pos.line, owner_pos.column);
        Ok(self.push_directive_set(refs))
    }

    fn lower_type(&mut self, ty: &ast::Type) -> Ref {
        let lowered = match ty {
            ast::Type::NamedType(name) => Type::Named(self.name(name.as_str())),
            ast::Type::ListType(inner) => Type::List(self.lower_type(inner)),
            ast::Type::NonNullType(inner) => Type::NonNull(self.lower_type(inner)),
        };
        self.push_type(lowered)
    }

    fn lower_value(&mut self, value: &ast::Value, pos: ast::AstPos) -> Result<Ref> {
        let lowered = match value {
            ast::Value::Boolean(b) => Value::Boolean(*b),
            ast::Value::Enum(name) => Value::Enum(self.name(name.as_str())),
            ast::Value::Float(f) => Value::Float(*f),
            ast::Value::Int(num) => match num.as_i64() {
                Some(i) => Value::Int(i),
                None => return Err(DocumentBuildError::IntegerOutOfRange {
                    line: pos.line,
                    col: pos.column,
                }),
            },
            ast::Value::List(items) => {
                let mut refs = Vec::with_capacity(items.len());
                for item in items {
                    refs.push(self.lower_value(item, pos)?);
                }
                self.list_values.push(refs);
                Value::List(self.list_values.len() - 1)
            },
            ast::Value::Null => Value::Null,
            ast::Value::Object(entries) => {
                let mut refs = Vec::with_capacity(entries.len());
                for (name, entry) in entries {
                    let value = self.lower_value(entry, pos)?;
                    let name = self.name(name.as_str());
                    self.object_fields.push(ObjectField { name, value });
                    refs.push(self.object_fields.len() - 1);
                }
                self.object_values.push(refs);
                Value::Object(self.object_values.len() - 1)
            },
            ast::Value::String(s) => Value::String(self.name(s.as_str())),
            ast::Value::Variable(name) => Value::Variable(self.name(name.as_str())),
        };
        Ok(self.put_value(lowered))
    }
}

fn type_extension_name_and_pos(
    type_ext: &ast::schema::TypeExtension,
) -> (&str, ast::AstPos) {
    use ast::schema::TypeExtension as Ext;
    match type_ext {
        Ext::Enum(ext) => (ext.name.as_str(), ext.position),
        Ext::InputObject(ext) => (ext.name.as_str(), ext.position),
        Ext::Interface(ext) => (ext.name.as_str(), ext.position),
        Ext::Object(ext) => (ext.name.as_str(), ext.position),
        Ext::Scalar(ext) => (ext.name.as_str(), ext.position),
        Ext::Union(ext) => (ext.name.as_str(), ext.position),
    }
}
