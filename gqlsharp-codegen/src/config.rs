//! Code generation settings.

/// What to do when two fields of one type map to the same property.
///
/// Properties are equal when their normalized name and mapped type match,
/// so `first_name: String` and `firstName: String!` collide even though their
/// nullability differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateFieldPolicy {
    /// Keep the first field and drop later duplicates with a warning.
    #[default]
    KeepFirst,
    /// Fail generation with `CodegenError::DuplicateField`.
    Reject,
}

/// Settings for the visitor and the C# renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    namespace: Option<String>,
    duplicate_fields: DuplicateFieldPolicy,
    indent: usize,
    emit_usings: bool,
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: None,
            duplicate_fields: DuplicateFieldPolicy::KeepFirst,
            indent: 4,
            emit_usings: true,
        }
    }

    /// Sets the namespace wrapping the generated classes.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the duplicate field policy.
    #[must_use]
    pub fn duplicate_fields(mut self, policy: DuplicateFieldPolicy) -> Self {
        self.duplicate_fields = policy;
        self
    }

    /// Sets the number of spaces per indentation level.
    #[must_use]
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    /// Sets whether `using` directives are emitted.
    #[must_use]
    pub fn emit_usings(mut self, emit: bool) -> Self {
        self.emit_usings = emit;
        self
    }

    /// Returns the configured namespace.
    #[must_use]
    pub fn namespace_name(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the duplicate field policy.
    #[must_use]
    pub const fn duplicate_field_policy(&self) -> DuplicateFieldPolicy {
        self.duplicate_fields
    }

    /// Returns the number of spaces per indentation level.
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent
    }

    /// Returns true if `using` directives are emitted.
    #[must_use]
    pub const fn usings_enabled(&self) -> bool {
        self.emit_usings
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodegenConfig::default();
        assert_eq!(config.namespace_name(), None);
        assert_eq!(config.duplicate_field_policy(), DuplicateFieldPolicy::KeepFirst);
        assert_eq!(config.indent_width(), 4);
        assert!(config.usings_enabled());
    }

    #[test]
    fn test_builder_chain() {
        let config = CodegenConfig::new()
            .namespace("Acme.Models")
            .duplicate_fields(DuplicateFieldPolicy::Reject)
            .indent(2)
            .emit_usings(false);

        assert_eq!(config.namespace_name(), Some("Acme.Models"));
        assert_eq!(config.duplicate_field_policy(), DuplicateFieldPolicy::Reject);
        assert_eq!(config.indent_width(), 2);
        assert!(!config.usings_enabled());
    }
}
