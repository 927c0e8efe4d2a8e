//! # gqlsharp
//!
//! Generate C# classes from the object types of a GraphQL schema.
//!
//! ## Features
//!
//! - **Class extraction** - One class per object type, one property per field
//! - **Scalar mapping** - Built-in scalars map to `int`, `float`, `string`, `bool` and `Guid`
//! - **Interfaces** - Implemented interfaces become the class's base list
//! - **C# rendering** - Auto-properties with array and nullable modifiers
//!
//! ## Quick Start
//!
//! ```
//! use gqlsharp::prelude::*;
//!
//! let schema = Schema::from_types([ObjectDef::new("Simple")
//!     .with_field(FieldDef::new("int32", TypeRef::named("Int").non_null()))
//!     .with_field(FieldDef::new("float", TypeRef::named("Float")))
//!     .into()])?;
//!
//! let code = Generator::new(&schema).generate()?;
//! assert!(code.contains("public int Int32 { get; set; }"));
//! assert!(code.contains("public float? Float { get; set; }"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type graph definitions and the schema registry
//! - [`codegen`] - Class descriptors, the object type visitor and C# rendering

pub mod prelude;

/// Type graph definitions and the schema registry.
pub mod schema {
    pub use gqlsharp_schema::*;
}

/// Class extraction and C# code generation.
pub mod codegen {
    pub use gqlsharp_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gqlsharp_codegen::{Class, ClassSet, CodegenConfig, CodegenError, Generator, generate};
pub use gqlsharp_schema::{Schema, SchemaError};
