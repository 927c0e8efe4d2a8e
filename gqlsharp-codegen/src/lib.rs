//! # gqlsharp Codegen
//!
//! C# class generation from GraphQL object types.
//!
//! This crate provides:
//! - Property and class descriptors extracted from object types
//! - The object type visitor and its scalar mapping
//! - C# class rendering
//! - JSON export of descriptors for external renderers

pub mod class;
pub mod config;
pub mod csharp;
pub mod error;
pub mod generator;
pub mod property;
pub mod scalars;
pub mod visitor;

pub use class::{Class, ClassBuilder, ClassSet};
pub use config::{CodegenConfig, DuplicateFieldPolicy};
pub use error::CodegenError;
pub use generator::Generator;
pub use property::{Property, to_pascal_case};
pub use scalars::{ScalarType, map_scalar};
pub use visitor::{ClassVisitor, TypeVisitor};

use gqlsharp_schema::Schema;

/// Generates C# classes for the object types of a schema.
///
/// # Arguments
/// * `schema` - Schema holding the type definitions
///
/// # Returns
/// Generated C# code as a string.
///
/// # Errors
/// Returns `CodegenError` if the schema violates the visitor's preconditions.
pub fn generate(schema: &Schema) -> Result<String, CodegenError> {
    Generator::new(schema).generate()
}
