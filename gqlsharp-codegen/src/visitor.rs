//! Object type visitor.
//!
//! Walks the schema's object types and extracts one [`Class`] per type.
//!
//! Given the schema
//!
//! ```graphql
//! type Simple {
//!     int32: Int!
//!     float: Float
//!     string: String!
//!     bool: Boolean
//!     id: ID!
//! }
//! ```
//!
//! the visitor produces a class `Simple` with the properties `Int32: int`,
//! `Float: float?`, `String: string`, `Bool: bool?` and `Id: Guid`.

use crate::class::{Class, ClassBuilder, ClassSet};
use crate::config::{CodegenConfig, DuplicateFieldPolicy};
use crate::error::CodegenError;
use crate::property::Property;
use gqlsharp_schema::{ObjectDef, Schema, TypeDef};

/// Visitor turning schema type definitions into generatable classes.
pub trait TypeVisitor {
    /// Visits every type of the schema and returns the extracted classes.
    ///
    /// # Errors
    /// Returns `CodegenError` if the type graph violates the visitor's
    /// preconditions.
    fn visit(&self, schema: &Schema) -> Result<ClassSet, CodegenError>;
}

/// Extracts object types as classes.
///
/// Interfaces, unions, enums, scalars and input objects are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassVisitor {
    duplicate_fields: DuplicateFieldPolicy,
}

impl ClassVisitor {
    /// Creates a visitor that keeps the first of duplicate fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a visitor with the given duplicate field policy.
    #[must_use]
    pub const fn with_policy(duplicate_fields: DuplicateFieldPolicy) -> Self {
        Self { duplicate_fields }
    }

    /// Creates a visitor from generation settings.
    #[must_use]
    pub const fn from_config(config: &CodegenConfig) -> Self {
        Self::with_policy(config.duplicate_field_policy())
    }

    /// Builds the class for one object type.
    ///
    /// # Errors
    /// Returns `CodegenError::DuplicateField` under the reject policy, or
    /// `CodegenError::Schema` if an implemented interface cannot be resolved.
    pub fn visit_object(&self, schema: &Schema, object: &ObjectDef) -> Result<Class, CodegenError> {
        tracing::debug!("Visiting object type {}", object.name);

        let mut class = Class::builder(&object.name);
        self.extract_properties(object, &mut class)?;
        extract_implemented_interfaces(schema, object, &mut class)?;

        Ok(class.build())
    }

    fn extract_properties(
        &self,
        object: &ObjectDef,
        class: &mut ClassBuilder,
    ) -> Result<(), CodegenError> {
        for field in &object.fields {
            let property = Property::from_field(field);
            tracing::trace!(
                "{}.{}: {} -> {} (array={}, nullable={})",
                object.name,
                field.name,
                field.ty,
                property.type_name(),
                property.is_array,
                property.is_nullable
            );

            if class.contains_property(&property) {
                match self.duplicate_fields {
                    DuplicateFieldPolicy::Reject => {
                        return Err(CodegenError::duplicate_field(&object.name, &field.name));
                    }
                    DuplicateFieldPolicy::KeepFirst => {
                        tracing::warn!(
                            "Dropping field {}.{}: property {} already declared",
                            object.name,
                            field.name,
                            property.name()
                        );
                        continue;
                    }
                }
            }

            class.add_property(property);
        }

        Ok(())
    }
}

impl TypeVisitor for ClassVisitor {
    fn visit(&self, schema: &Schema) -> Result<ClassSet, CodegenError> {
        let mut classes = ClassSet::new();

        for type_def in schema.types() {
            match type_def {
                TypeDef::Object(object) => {
                    classes.insert(self.visit_object(schema, object)?);
                }
                TypeDef::Interface(_)
                | TypeDef::Union(_)
                | TypeDef::Enum(_)
                | TypeDef::Scalar(_)
                | TypeDef::InputObject(_) => {
                    tracing::trace!("Skipping {} type {}", type_def.kind(), type_def.name());
                }
            }
        }

        tracing::debug!("Extracted {} classes", classes.len());
        Ok(classes)
    }
}

/// Resolves the object type's interface references and records their names.
fn extract_implemented_interfaces(
    schema: &Schema,
    object: &ObjectDef,
    class: &mut ClassBuilder,
) -> Result<(), CodegenError> {
    for reference in &object.interfaces {
        let interface = schema.resolve_interface(reference, &object.name)?;
        class.add_interface(interface.name.as_str());
    }
    Ok(())
}
