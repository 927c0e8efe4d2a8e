//! C# class code generation.

use crate::class::{Class, ClassSet};
use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::property::Property;
use crate::scalars::ScalarType;

/// Generator for C# class declarations.
pub struct ClassGenerator<'a> {
    classes: &'a ClassSet,
    config: &'a CodegenConfig,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(classes: &'a ClassSet, config: &'a CodegenConfig) -> Self {
        Self { classes, config }
    }

    /// Generates all class declarations.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        if self.config.usings_enabled() && self.uses_guid() {
            output.push_str("using System;\n\n");
        }

        let namespace = self.config.namespace_name();
        let depth = match namespace {
            Some(name) => {
                output.push_str(&format!("namespace {}\n{{\n", name));
                1
            }
            None => 0,
        };

        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&self.generate_class(class, depth));
        }

        if namespace.is_some() {
            output.push_str("}\n");
        }

        output
    }

    /// Generates one class declaration at the given nesting depth.
    fn generate_class(&self, class: &Class, depth: usize) -> String {
        let mut output = String::new();
        let outer = self.indent(depth);
        let inner = self.indent(depth + 1);

        output.push_str(&format!("{}public class {}", outer, class.name()));
        if !class.interfaces().is_empty() {
            let interfaces: Vec<&str> = class.interfaces().iter().map(String::as_str).collect();
            output.push_str(&format!(" : {}", interfaces.join(", ")));
        }
        output.push('\n');
        output.push_str(&format!("{}{{\n", outer));

        for property in class.properties() {
            output.push_str(&format!("{}{}\n", inner, property_declaration(property)));
        }

        output.push_str(&format!("{}}}\n", outer));

        output
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.config.indent_width())
    }

    /// Returns true if any property needs `System.Guid`.
    fn uses_guid(&self) -> bool {
        let guid = ScalarType::Id.csharp_type();
        self.classes
            .iter()
            .flat_map(|class| class.properties())
            .any(|property| property.type_name() == guid)
    }
}

/// Renders a property as a C# auto-property declaration.
#[must_use]
pub fn property_declaration(property: &Property) -> String {
    format!(
        "public {}{}{} {} {{ get; set; }}",
        property.type_name(),
        if property.is_array { "[]" } else { "" },
        if property.is_nullable { "?" } else { "" },
        property.name()
    )
}

/// Checks that a namespace is a dotted sequence of C# identifiers.
///
/// # Errors
/// Returns `CodegenError::Generation` naming the offending namespace.
pub fn validate_namespace(namespace: &str) -> Result<(), CodegenError> {
    let valid = namespace.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_')
    });

    if valid {
        Ok(())
    } else {
        Err(CodegenError::generation(format!(
            "invalid namespace '{}'",
            namespace
        )))
    }
}
