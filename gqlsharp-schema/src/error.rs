//! Error types for the schema registry.

use thiserror::Error;

/// Error type for schema registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two type definitions share the same name.
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// Name of the duplicate.
        name: String,
    },

    /// A referenced type is not registered.
    #[error("type '{name}' referenced by '{referenced_by}' not found")]
    TypeNotFound {
        /// Referenced type name.
        name: String,
        /// Type holding the reference.
        referenced_by: String,
    },

    /// A type listed as an implemented interface is not an interface.
    #[error("type '{name}' implemented by '{referenced_by}' is a {kind}, not an interface")]
    NotAnInterface {
        /// Referenced type name.
        name: String,
        /// Type holding the reference.
        referenced_by: String,
        /// Actual kind of the referenced type.
        kind: String,
    },
}

impl SchemaError {
    /// Creates a duplicate type error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    /// Creates a type not found error.
    pub fn not_found(name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::TypeNotFound {
            name: name.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Creates a not-an-interface error.
    pub fn not_an_interface(
        name: impl Into<String>,
        referenced_by: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self::NotAnInterface {
            name: name.into(),
            referenced_by: referenced_by.into(),
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = SchemaError::not_found("Node", "User");
        assert_eq!(err.to_string(), "type 'Node' referenced by 'User' not found");

        let err = SchemaError::not_an_interface("Role", "User", "enum");
        assert!(err.to_string().contains("'Role'"));
        assert!(err.to_string().contains("'User'"));
        assert!(err.to_string().contains("enum"));
    }

    #[test]
    fn test_duplicate() {
        let err = SchemaError::duplicate("User");
        assert_eq!(err, SchemaError::DuplicateType { name: "User".into() });
    }
}
