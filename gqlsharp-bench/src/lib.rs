//! # gqlsharp Bench
//!
//! Synthetic schemas for benchmarking the visitor and the C# renderer.

pub mod fixtures;

pub use fixtures::synthetic_schema;
