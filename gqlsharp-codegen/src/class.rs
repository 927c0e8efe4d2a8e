//! Class descriptors.
//!
//! A [`Class`] is built through a [`ClassBuilder`] while its source object
//! type is visited and is read-only once built.

use crate::property::Property;
use indexmap::IndexSet;
use serde::Serialize;
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// Insertion-ordered set of classes, unique by class name.
pub type ClassSet = IndexSet<Class>;

/// One generatable class.
#[derive(Debug, Clone, Serialize)]
pub struct Class {
    name: String,
    properties: IndexSet<Property>,
    interfaces: IndexSet<String>,
}

impl Class {
    /// Starts building a class with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &IndexSet<Property> {
        &self.properties
    }

    /// Returns the implemented interface names in insertion order.
    #[must_use]
    pub fn interfaces(&self) -> &IndexSet<String> {
        &self.interfaces
    }

    /// Looks up a property by its normalized name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns true if the class implements the named interface.
    #[must_use]
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.contains(interface)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

// Hash and Eq only look at the name, so sets of classes can be queried by name.
impl Borrow<str> for Class {
    fn borrow(&self) -> &str {
        &self.name
    }
}

/// Mutable builder for a [`Class`].
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    name: String,
    properties: IndexSet<Property>,
    interfaces: IndexSet<String>,
}

impl ClassBuilder {
    /// Creates a new builder for a class with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexSet::new(),
            interfaces: IndexSet::new(),
        }
    }

    /// Returns the name of the class under construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a property, keeping the first of any equal properties.
    ///
    /// Returns `false` if an equal property was already present.
    pub fn add_property(&mut self, property: Property) -> bool {
        self.properties.insert(property)
    }

    /// Returns true if an equal property was already added.
    #[must_use]
    pub fn contains_property(&self, property: &Property) -> bool {
        self.properties.contains(property)
    }

    /// Adds an implemented interface name.
    ///
    /// Returns `false` if the interface was already present.
    pub fn add_interface(&mut self, interface: impl Into<String>) -> bool {
        self.interfaces.insert(interface.into())
    }

    /// Returns the builder with an extra property.
    #[must_use]
    pub fn property(mut self, property: Property) -> Self {
        self.add_property(property);
        self
    }

    /// Returns the builder with an extra interface.
    #[must_use]
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.add_interface(interface);
        self
    }

    /// Finalizes the class.
    #[must_use]
    pub fn build(self) -> Class {
        Class {
            name: self.name,
            properties: self.properties,
            interfaces: self.interfaces,
        }
    }
}
