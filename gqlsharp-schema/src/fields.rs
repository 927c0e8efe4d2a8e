//! Field definitions and type references.
//!
//! A field's declared type is kept as the wrapper chain written in the
//! schema (`[Int]!`, `String`, ...) so consumers can read the list and
//! non-null modifiers without resolving anything.

use std::fmt;

/// Field definition on an object, interface or input object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as declared in the schema.
    pub name: String,
    /// Declared type reference.
    pub ty: TypeRef,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns the innermost named type of the field.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.named_type()
    }

    /// Returns true if the field is declared as a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.ty.is_list()
    }

    /// Returns true if the field may be null.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.ty.is_nullable()
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Reference to a scalar or another named type.
    Named(String),
    /// List wrapper (`[T]`).
    List(Box<TypeRef>),
    /// Non-null wrapper (`T!`).
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a reference to a named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps this reference in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wraps this reference in a non-null modifier.
    ///
    /// Wrapping an already non-null reference is a no-op.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// Returns true if the outermost wrapper is not non-null.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }

    /// Returns true if the type is a list once the outer non-null
    /// modifier is stripped.
    #[must_use]
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => matches!(**inner, Self::List(_)),
            Self::Named(_) => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Deferred reference from an object type to an interface it implements.
///
/// Only the interface name is stored; the definition is looked up in the
/// [`Schema`](crate::Schema) registry when the reference is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceRef {
    /// Name of the referenced interface.
    pub type_name: String,
}

impl InterfaceRef {
    /// Creates a new interface reference.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl From<&str> for InterfaceRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_type_unwraps_all_wrappers() {
        let ty = TypeRef::named("User").non_null().list().non_null();
        assert_eq!(ty.named_type(), "User");
        assert_eq!(ty.to_string(), "[User!]!");
    }

    #[test]
    fn test_nullability() {
        assert!(TypeRef::named("Int").is_nullable());
        assert!(!TypeRef::named("Int").non_null().is_nullable());
        // Non-null items inside a nullable list leave the field nullable.
        assert!(TypeRef::named("Int").non_null().list().is_nullable());
    }

    #[test]
    fn test_list_detection() {
        assert!(!TypeRef::named("Int").is_list());
        assert!(!TypeRef::named("Int").non_null().is_list());
        assert!(TypeRef::named("Int").list().is_list());
        assert!(TypeRef::named("Int").list().non_null().is_list());
        assert!(TypeRef::named("Int").list().list().is_list());
    }

    #[test]
    fn test_non_null_is_not_doubled() {
        let ty = TypeRef::named("ID").non_null().non_null();
        assert_eq!(ty.to_string(), "ID!");
    }

    #[test]
    fn test_field_def_accessors() {
        let field = FieldDef::new("friends", TypeRef::named("User").list());
        assert_eq!(field.name, "friends");
        assert_eq!(field.type_name(), "User");
        assert!(field.is_list());
        assert!(field.is_nullable());
    }

    #[test]
    fn test_interface_ref() {
        let r = InterfaceRef::from("Node");
        assert_eq!(r, InterfaceRef::new("Node".to_string()));
        assert_eq!(r.type_name, "Node");
    }
}
