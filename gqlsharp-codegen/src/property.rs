//! Property descriptors.
//!
//! A [`Property`] is one class member derived from one schema field. Its
//! identity is the normalized name together with the mapped type; the array
//! and nullable modifiers do not take part in equality.

use crate::scalars::map_scalar;
use gqlsharp_schema::FieldDef;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// One generatable class member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    /// Whether the member is a list.
    pub is_array: bool,
    /// Whether the member may be null.
    pub is_nullable: bool,
}

impl Property {
    /// Creates a property from a field name and its declared type name.
    ///
    /// The field name is normalized with [`to_pascal_case`] and the type
    /// name is mapped through [`map_scalar`].
    #[must_use]
    pub fn new(field_name: &str, declared_type: &str, is_array: bool, is_nullable: bool) -> Self {
        Self {
            name: to_pascal_case(field_name),
            type_name: map_scalar(declared_type).to_string(),
            is_array,
            is_nullable,
        }
    }

    /// Creates a property from a schema field definition.
    #[must_use]
    pub fn from_field(field: &FieldDef) -> Self {
        Self::new(
            &field.name,
            field.type_name(),
            field.is_list(),
            field.is_nullable(),
        )
    }

    /// Returns the normalized member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mapped member type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.type_name == other.type_name
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.type_name.hash(state);
    }
}

/// Converts a field name to PascalCase.
///
/// The first character and every character after a separator (`_`, `-` or
/// whitespace) is upper-cased and separators are dropped. Everything else is
/// kept as is, so `firstName` and `first_name` both become `FirstName`.
///
/// Leading underscores are kept when dropping them would leave an empty name
/// or one starting with a digit, so `_` stays `_` and `_1st` stays `_1st`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let leading = &s[..s.len() - s.trim_start_matches('_').len()];
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert_str(0, leading);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csharp::property_declaration;
    use gqlsharp_schema::TypeRef;
    use std::collections::HashSet;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("first_name"), "FirstName");
        assert_eq!(to_pascal_case("firstName"), "FirstName");
        assert_eq!(to_pascal_case("int32"), "Int32");
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("created at"), "CreatedAt");
        assert_eq!(to_pascal_case("__typename"), "Typename");
        assert_eq!(to_pascal_case("ID"), "ID");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_keeps_required_underscores() {
        assert_eq!(to_pascal_case("_"), "_");
        assert_eq!(to_pascal_case("__"), "__");
        assert_eq!(to_pascal_case("_1st"), "_1st");
        assert_eq!(to_pascal_case("__2_fa"), "__2Fa");
        assert_eq!(to_pascal_case("_private"), "Private");
    }

    #[test]
    fn test_underscore_names_render_as_identifiers() {
        let cases = [
            ("_", "public int _ { get; set; }"),
            ("__", "public int __ { get; set; }"),
            ("_1st", "public int _1st { get; set; }"),
        ];
        for (field, declaration) in cases {
            let prop = Property::new(field, "Int", false, false);
            assert_eq!(property_declaration(&prop), declaration);
        }

        assert_ne!(
            Property::new("_", "Int", false, false),
            Property::new("__", "Int", false, false)
        );
    }

    #[test]
    fn test_to_pascal_case_is_idempotent() {
        for input in [
            "first_name",
            "firstName",
            "already_Pascal_Case",
            "x",
            "__a__b__",
            "with space-and_dash",
            "ärger_über",
            "_",
            "__",
            "_1st",
            "__2_fa",
        ] {
            let once = to_pascal_case(input);
            assert_eq!(to_pascal_case(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_property_new() {
        let prop = Property::new("first_name", "String", false, true);
        assert_eq!(prop.name(), "FirstName");
        assert_eq!(prop.type_name(), "string");
        assert!(!prop.is_array);
        assert!(prop.is_nullable);
    }

    #[test]
    fn test_property_passes_custom_types_through() {
        let prop = Property::new("author", "User", false, false);
        assert_eq!(prop.type_name(), "User");
    }

    #[test]
    fn test_property_equality_ignores_modifiers() {
        let a = Property::new("tags", "String", true, false);
        let b = Property::new("tags", "String", false, true);
        let c = Property::new("tags", "Int", true, false);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        assert!(set.insert(a));
        assert!(!set.insert(b));
        assert!(set.insert(c));
    }

    #[test]
    fn test_equality_uses_normalized_name() {
        let snake = Property::new("first_name", "String", false, false);
        let camel = Property::new("firstName", "String", false, false);
        assert_eq!(snake, camel);
    }

    #[test]
    fn test_modifiers_stay_mutable() {
        let mut prop = Property::new("score", "Float", false, false);
        prop.is_array = true;
        prop.is_nullable = true;
        assert!(prop.is_array);
        assert!(prop.is_nullable);
        assert_eq!(prop.name(), "Score");
    }

    #[test]
    fn test_from_field() {
        let field = FieldDef::new("friendIds", TypeRef::named("ID").non_null().list().non_null());
        let prop = Property::from_field(&field);
        assert_eq!(prop.name(), "FriendIds");
        assert_eq!(prop.type_name(), "Guid");
        assert!(prop.is_array);
        assert!(!prop.is_nullable);
    }

    #[test]
    fn test_serialize() {
        let prop = Property::new("score", "Float", true, true);
        let json = serde_json::to_value(&prop).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Score",
                "type": "float",
                "isArray": true,
                "isNullable": true,
            })
        );
    }
}
