//! Schema type definitions.
//!
//! This module contains the type graph the generators walk: the [`Schema`]
//! registry and one definition struct per GraphQL type kind.

use crate::error::SchemaError;
use crate::fields::{FieldDef, InterfaceRef};
use std::collections::HashMap;
use std::fmt;

/// Registry of every type definition in a schema.
///
/// Types keep their declaration order; lookups by name go through an
/// index built as types are added.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Type definitions in declaration order.
    types: Vec<TypeDef>,
    /// Type lookup map.
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from a sequence of type definitions.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateType` if two definitions share a name.
    pub fn from_types(types: impl IntoIterator<Item = TypeDef>) -> Result<Self, SchemaError> {
        let mut schema = Self::new();
        for type_def in types {
            schema.add_type(type_def)?;
        }
        Ok(schema)
    }

    /// Adds a type definition to the schema.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateType` if a type with the same name is
    /// already registered.
    pub fn add_type(&mut self, type_def: TypeDef) -> Result<(), SchemaError> {
        let name = type_def.name();
        if self.type_map.contains_key(name) {
            return Err(SchemaError::duplicate(name));
        }
        self.type_map.insert(name.to_string(), self.types.len());
        self.types.push(type_def);
        Ok(())
    }

    /// Returns all type definitions in declaration order.
    #[must_use]
    pub fn types(&self) -> &[TypeDef] {
        &self.types
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Resolves a deferred interface reference held by `referenced_by`.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if no type has the referenced name,
    /// or `SchemaError::NotAnInterface` if the name belongs to another kind.
    pub fn resolve_interface(
        &self,
        reference: &InterfaceRef,
        referenced_by: &str,
    ) -> Result<&InterfaceDef, SchemaError> {
        match self.get_type(&reference.type_name) {
            Some(TypeDef::Interface(interface)) => Ok(interface),
            Some(other) => Err(SchemaError::not_an_interface(
                &reference.type_name,
                referenced_by,
                other.kind().as_str(),
            )),
            None => Err(SchemaError::not_found(&reference.type_name, referenced_by)),
        }
    }
}

/// Kind tag of a type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Object type.
    Object,
    /// Interface type.
    Interface,
    /// Union type.
    Union,
    /// Enum type.
    Enum,
    /// Scalar type.
    Scalar,
    /// Input object type.
    InputObject,
}

impl TypeKind {
    /// Returns the kind name as used in GraphQL introspection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
            Self::InputObject => "input object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type definition variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// Object type definition.
    Object(ObjectDef),
    /// Interface type definition.
    Interface(InterfaceDef),
    /// Union type definition.
    Union(UnionDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Custom scalar definition.
    Scalar(ScalarDef),
    /// Input object type definition.
    InputObject(InputObjectDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(o) => &o.name,
            Self::Interface(i) => &i.name,
            Self::Union(u) => &u.name,
            Self::Enum(e) => &e.name,
            Self::Scalar(s) => &s.name,
            Self::InputObject(i) => &i.name,
        }
    }

    /// Returns the kind tag of the type.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::Scalar(_) => TypeKind::Scalar,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Returns the declared fields, empty for kinds without fields.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        match self {
            Self::Object(o) => &o.fields,
            Self::Interface(i) => &i.fields,
            Self::InputObject(i) => &i.fields,
            Self::Union(_) | Self::Enum(_) | Self::Scalar(_) => &[],
        }
    }

    /// Returns the object definition if this is an object type.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectDef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns true if this is an object type.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl From<ObjectDef> for TypeDef {
    fn from(def: ObjectDef) -> Self {
        Self::Object(def)
    }
}

impl From<InterfaceDef> for TypeDef {
    fn from(def: InterfaceDef) -> Self {
        Self::Interface(def)
    }
}

impl From<UnionDef> for TypeDef {
    fn from(def: UnionDef) -> Self {
        Self::Union(def)
    }
}

impl From<EnumDef> for TypeDef {
    fn from(def: EnumDef) -> Self {
        Self::Enum(def)
    }
}

impl From<ScalarDef> for TypeDef {
    fn from(def: ScalarDef) -> Self {
        Self::Scalar(def)
    }
}

impl From<InputObjectDef> for TypeDef {
    fn from(def: InputObjectDef) -> Self {
        Self::InputObject(def)
    }
}

/// Object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Implemented interfaces, by deferred reference.
    pub interfaces: Vec<InterfaceRef>,
}

impl ObjectDef {
    /// Creates a new object type definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Adds a field to the object type.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Adds an implemented interface reference.
    pub fn add_interface(&mut self, interface: InterfaceRef) {
        self.interfaces.push(interface);
    }

    /// Returns the object type with an extra field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.add_field(field);
        self
    }

    /// Returns the object type with an extra implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<InterfaceRef>) -> Self {
        self.add_interface(interface.into());
        self
    }

    /// Returns true if the object type implements any interface.
    #[must_use]
    pub fn has_interfaces(&self) -> bool {
        !self.interfaces.is_empty()
    }
}

/// Interface type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDef {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl InterfaceDef {
    /// Creates a new interface type definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the interface type with an extra field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Union type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Member object type names.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a new union type definition.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Enum values in declaration order.
    pub values: Vec<String>,
}

impl EnumDef {
    /// Creates a new enum type definition.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Custom scalar definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
}

impl ScalarDef {
    /// Creates a new scalar definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Input object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Input fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl InputObjectDef {
    /// Creates a new input object type definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the input object type with an extra field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::TypeRef;

    fn sample_schema() -> Schema {
        Schema::from_types([
            InterfaceDef::new("Node")
                .with_field(FieldDef::new("id", TypeRef::named("ID").non_null()))
                .into(),
            ObjectDef::new("User")
                .with_field(FieldDef::new("id", TypeRef::named("ID").non_null()))
                .implements("Node")
                .into(),
            EnumDef::new("Role", vec!["ADMIN".into(), "GUEST".into()]).into(),
            ScalarDef::new("DateTime").into(),
        ])
        .expect("valid schema")
    }

    #[test]
    fn test_schema_keeps_declaration_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.types().iter().map(TypeDef::name).collect();
        assert_eq!(names, ["Node", "User", "Role", "DateTime"]);
        assert_eq!(schema.len(), 4);
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_schema_lookup() {
        let schema = sample_schema();
        assert!(schema.has_type("User"));
        assert!(!schema.has_type("Post"));
        assert_eq!(schema.get_type("Role").map(TypeDef::kind), Some(TypeKind::Enum));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut schema = sample_schema();
        let result = schema.add_type(ObjectDef::new("User").into());
        assert_eq!(result, Err(SchemaError::duplicate("User")));
        assert_eq!(schema.len(), 4);
    }

    #[test]
    fn test_resolve_interface() {
        let schema = sample_schema();
        let node = schema
            .resolve_interface(&InterfaceRef::new("Node"), "User")
            .expect("Node resolves");
        assert_eq!(node.name, "Node");
        assert_eq!(node.fields.len(), 1);
    }

    #[test]
    fn test_resolve_interface_missing() {
        let schema = sample_schema();
        let err = schema
            .resolve_interface(&InterfaceRef::new("Entity"), "User")
            .unwrap_err();
        assert_eq!(err, SchemaError::not_found("Entity", "User"));
    }

    #[test]
    fn test_resolve_interface_wrong_kind() {
        let schema = sample_schema();
        let err = schema
            .resolve_interface(&InterfaceRef::new("Role"), "User")
            .unwrap_err();
        assert_eq!(err, SchemaError::not_an_interface("Role", "User", "enum"));
    }

    #[test]
    fn test_type_def_accessors() {
        let schema = sample_schema();
        let user = schema.get_type("User").expect("User exists");
        assert!(user.is_object());
        assert_eq!(user.fields().len(), 1);
        assert!(user.as_object().is_some_and(ObjectDef::has_interfaces));

        let scalar = schema.get_type("DateTime").expect("DateTime exists");
        assert!(!scalar.is_object());
        assert!(scalar.fields().is_empty());
        assert!(scalar.as_object().is_none());
    }

    #[test]
    fn test_type_kind_display() {
        assert_eq!(TypeKind::Object.to_string(), "object");
        assert_eq!(TypeKind::InputObject.to_string(), "input object");
        assert_eq!(TypeDef::from(UnionDef::new("Result", vec![])).kind(), TypeKind::Union);
        assert_eq!(TypeDef::from(InputObjectDef::new("UserInput")).kind(), TypeKind::InputObject);
    }
}
