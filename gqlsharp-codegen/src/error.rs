//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema registry error, such as an unresolvable interface reference.
    #[error("schema error: {0}")]
    Schema(#[from] gqlsharp_schema::SchemaError),

    /// Two fields of one type map to the same property.
    #[error("duplicate field '{field}' on type '{type_name}'")]
    DuplicateField {
        /// Type declaring the field.
        type_name: String,
        /// Field name as declared.
        field: String,
    },

    /// Descriptor serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a duplicate field error.
    pub fn duplicate_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}
