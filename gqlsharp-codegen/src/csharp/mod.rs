//! C# code generation modules.

pub mod classes;

pub use classes::{ClassGenerator, property_declaration, validate_namespace};
