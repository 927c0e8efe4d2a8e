//! Built-in GraphQL scalars and their C# counterparts.

/// Built-in GraphQL scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Signed 32-bit integer.
    Int,
    /// Floating point value, generated as single precision.
    Float,
    /// UTF-8 string.
    String,
    /// Boolean.
    Boolean,
    /// Unique identifier.
    Id,
}

impl ScalarType {
    /// All built-in scalars.
    pub const ALL: [Self; 5] = [
        Self::Int,
        Self::Float,
        Self::String,
        Self::Boolean,
        Self::Id,
    ];

    /// Returns the GraphQL scalar name.
    #[must_use]
    pub const fn graphql_name(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Id => "ID",
        }
    }

    /// Returns the C# type name for this scalar.
    #[must_use]
    pub const fn csharp_type(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "bool",
            Self::Id => "Guid",
        }
    }

    /// Parses a built-in scalar from its GraphQL name.
    #[must_use]
    pub fn from_graphql_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "ID" => Some(Self::Id),
            _ => None,
        }
    }
}

/// Maps a GraphQL type name to the C# type used for a property.
///
/// Built-in scalars map to their C# counterparts; any other name (object
/// types, enums, custom scalars) is returned unchanged.
#[must_use]
pub fn map_scalar(name: &str) -> &str {
    ScalarType::from_graphql_name(name).map_or(name, |scalar| scalar.csharp_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_builtin_scalars() {
        assert_eq!(map_scalar("Int"), "int");
        assert_eq!(map_scalar("Float"), "float");
        assert_eq!(map_scalar("String"), "string");
        assert_eq!(map_scalar("Boolean"), "bool");
        assert_eq!(map_scalar("ID"), "Guid");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        for name in ["User", "DateTime", "int", "Id", "", "Ünïcode"] {
            assert_eq!(map_scalar(name), name);
        }
    }

    #[test]
    fn test_graphql_name_round_trip() {
        for scalar in ScalarType::ALL {
            assert_eq!(ScalarType::from_graphql_name(scalar.graphql_name()), Some(scalar));
        }
    }

    #[test]
    fn test_mapping_is_case_sensitive() {
        assert_eq!(ScalarType::from_graphql_name("int"), None);
        assert_eq!(ScalarType::from_graphql_name("boolean"), None);
    }
}
