//! Top-level generator driving the visitor and the C# renderer.

use crate::class::ClassSet;
use crate::config::CodegenConfig;
use crate::csharp::{ClassGenerator, validate_namespace};
use crate::error::CodegenError;
use crate::visitor::{ClassVisitor, TypeVisitor};
use gqlsharp_schema::Schema;

/// Generates C# classes for the object types of a schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: CodegenConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default settings.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            config: CodegenConfig::default(),
        }
    }

    /// Replaces the generation settings.
    #[must_use]
    pub fn with_config(mut self, config: CodegenConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the generation settings.
    #[must_use]
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Extracts the class descriptors without rendering them.
    ///
    /// # Errors
    /// Returns `CodegenError` if the visitor rejects the schema.
    pub fn classes(&self) -> Result<ClassSet, CodegenError> {
        ClassVisitor::from_config(&self.config).visit(self.schema)
    }

    /// Generates C# source for every object type.
    ///
    /// # Errors
    /// Returns `CodegenError` if the namespace is invalid or the visitor
    /// rejects the schema.
    pub fn generate(&self) -> Result<String, CodegenError> {
        if let Some(namespace) = self.config.namespace_name() {
            validate_namespace(namespace)?;
        }

        let classes = self.classes()?;
        let output = ClassGenerator::new(&classes, &self.config).generate();

        tracing::info!(
            "Generated {} classes from {} schema types",
            classes.len(),
            self.schema.len()
        );
        Ok(output)
    }

    /// Serializes the class descriptors as pretty-printed JSON for an
    /// external renderer.
    ///
    /// # Errors
    /// Returns `CodegenError` if the visitor rejects the schema or
    /// serialization fails.
    pub fn generate_json(&self) -> Result<String, CodegenError> {
        let classes = self.classes()?;
        Ok(serde_json::to_string_pretty(&classes)?)
    }
}
