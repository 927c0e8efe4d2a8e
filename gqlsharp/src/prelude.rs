//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use gqlsharp::prelude::*;
//! ```

// Schema types
pub use gqlsharp_schema::{
    EnumDef, FieldDef, InputObjectDef, InterfaceDef, InterfaceRef, ObjectDef, ScalarDef, Schema,
    SchemaError, TypeDef, TypeKind, TypeRef, UnionDef,
};

// Codegen types
pub use gqlsharp_codegen::{
    Class, ClassBuilder, ClassSet, ClassVisitor, CodegenConfig, CodegenError,
    DuplicateFieldPolicy, Generator, Property, TypeVisitor,
};
