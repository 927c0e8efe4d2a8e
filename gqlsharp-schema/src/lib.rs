//! # gqlsharp Schema
//!
//! GraphQL type graph definitions.
//!
//! This crate provides:
//! - A registry of type definitions kept in declaration order
//! - Type definitions for every GraphQL type kind
//! - Field type references with list and non-null modifiers
//! - Deferred interface references resolved against the registry

pub mod error;
pub mod fields;
pub mod types;

pub use error::SchemaError;
pub use fields::{FieldDef, InterfaceRef, TypeRef};
pub use types::{
    EnumDef, InputObjectDef, InterfaceDef, ObjectDef, ScalarDef, Schema, TypeDef, TypeKind,
    UnionDef,
};
