//! Nominal type descriptors
//!
//! This module defines:
//! - ClassDef / ClassRef: runtime descriptor of a named class or interface
//! - TypeRegistry: name → descriptor lookup, used to turn type names into
//!   constraints
//! - Instance: an object value tagged with its class
//!
//! Instance-of checks walk the descriptor graph (parent chain and
//! implemented interfaces), so they never need the registry once a
//! descriptor has been resolved.

use crate::constraint::{PrimitiveKind, TypeConstraint};
use crate::error::{Error, Result};
use crate::value::Value;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Name of the built-in class every pair value is an instance of
pub const PAIR_CLASS: &str = "Pair";

static PAIR_CLASS_DEF: Lazy<ClassRef> = Lazy::new(|| {
    Arc::new(ClassDef {
        name: PAIR_CLASS.to_string(),
        kind: ClassKind::Class,
        parent: None,
        interfaces: Vec::new(),
    })
});

/// Shared handle to a type descriptor
pub type ClassRef = Arc<ClassDef>;

/// Whether a descriptor names a concrete class or an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    /// Instantiable class
    Class,
    /// Interface; cannot be instantiated
    Interface,
}

/// Runtime descriptor of a nominal type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    name: String,
    kind: ClassKind,
    parent: Option<ClassRef>,
    interfaces: Vec<ClassRef>,
}

impl ClassDef {
    /// The built-in `Pair` class
    pub fn pair() -> ClassRef {
        PAIR_CLASS_DEF.clone()
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class or interface
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Parent class, if any
    pub fn parent(&self) -> Option<&ClassRef> {
        self.parent.as_ref()
    }

    /// Directly implemented (or extended, for interfaces) interfaces
    pub fn interfaces(&self) -> &[ClassRef] {
        &self.interfaces
    }

    /// Check if this is an interface
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Instance-of check: true if `self` is `target`, extends it, or
    /// implements it (transitively)
    pub fn is_a(&self, target: &ClassDef) -> bool {
        if self.name == target.name {
            return true;
        }
        if let Some(parent) = &self.parent {
            if parent.is_a(target) {
                return true;
            }
        }
        self.interfaces.iter().any(|iface| iface.is_a(target))
    }
}

// Nominal types are identified by name
impl PartialEq for ClassDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassDef {}

impl fmt::Display for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Registry of known classes and interfaces
///
/// Plays the role of a class loader: a type name only becomes a usable
/// constraint once it resolves here.
///
/// # Examples
///
/// ```
/// use kollect_core::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry.define_interface("Shape", &[]).unwrap();
/// let circle = registry.define_class("Circle", None, &["Shape"]).unwrap();
/// let shape = registry.resolve("Shape").unwrap();
/// assert!(circle.is_a(&shape));
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    classes: FxHashMap<String, ClassRef>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding only the built-in `Pair` class
    pub fn new() -> Self {
        let mut classes = FxHashMap::default();
        classes.insert(PAIR_CLASS.to_string(), ClassDef::pair());
        Self { classes }
    }

    /// Define a class with an optional parent class and implemented interfaces
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if the name is taken, the parent is
    /// unknown or an interface, or an implemented name is unknown or a class.
    pub fn define_class(
        &mut self,
        name: &str,
        parent: Option<&str>,
        interfaces: &[&str],
    ) -> Result<ClassRef> {
        self.ensure_free(name)?;
        let parent = match parent {
            Some(parent_name) => {
                let parent = self.resolve(parent_name)?;
                if parent.is_interface() {
                    return Err(Error::construction(format!(
                        "class '{}' cannot extend interface '{}'",
                        name, parent_name
                    )));
                }
                Some(parent)
            }
            None => None,
        };
        let interfaces = self.resolve_interfaces(name, interfaces)?;
        Ok(self.insert(ClassDef {
            name: name.to_string(),
            kind: ClassKind::Class,
            parent,
            interfaces,
        }))
    }

    /// Define an interface extending zero or more interfaces
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if the name is taken or an extended name
    /// is unknown or a class.
    pub fn define_interface(&mut self, name: &str, extends: &[&str]) -> Result<ClassRef> {
        self.ensure_free(name)?;
        let interfaces = self.resolve_interfaces(name, extends)?;
        Ok(self.insert(ClassDef {
            name: name.to_string(),
            kind: ClassKind::Interface,
            parent: None,
            interfaces,
        }))
    }

    /// Look up a class or interface by name
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if the name is not registered.
    pub fn resolve(&self, name: &str) -> Result<ClassRef> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| Error::construction(format!("'{}' is not a known class or interface", name)))
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Parse a type name into a constraint
    ///
    /// Primitive names (`int`, `integer`, `string`, `bool`, `float`, `bytes`)
    /// and `any`/`mixed` are recognised first; every other name must resolve
    /// to a registered class or interface.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` for an unknown name.
    pub fn constraint(&self, name: &str) -> Result<TypeConstraint> {
        if let Some(kind) = PrimitiveKind::from_name(name) {
            return Ok(TypeConstraint::Primitive(kind));
        }
        match name {
            "any" | "mixed" => Ok(TypeConstraint::Any),
            _ => self.resolve(name).map(TypeConstraint::Nominal),
        }
    }

    fn ensure_free(&self, name: &str) -> Result<()> {
        let reserved = matches!(name, "any" | "mixed") || PrimitiveKind::from_name(name).is_some();
        if reserved || self.contains(name) {
            return Err(Error::construction(format!("type '{}' is already defined", name)));
        }
        Ok(())
    }

    fn resolve_interfaces(&self, owner: &str, names: &[&str]) -> Result<Vec<ClassRef>> {
        names
            .iter()
            .map(|iface_name| {
                let iface = self.resolve(iface_name)?;
                if !iface.is_interface() {
                    return Err(Error::construction(format!(
                        "'{}' cannot implement class '{}'",
                        owner, iface_name
                    )));
                }
                Ok(iface)
            })
            .collect()
    }

    fn insert(&mut self, def: ClassDef) -> ClassRef {
        let class = Arc::new(def);
        debug!(name = %class.name, kind = ?class.kind, "registered type");
        self.classes.insert(class.name.clone(), class.clone());
        class
    }
}

/// An object value: a class plus named fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    class: ClassRef,
    fields: BTreeMap<String, Value>,
}

impl Instance {
    /// Create an instance with no fields
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if `class` is an interface.
    pub fn new(class: &ClassRef) -> Result<Self> {
        if class.is_interface() {
            return Err(Error::construction(format!(
                "cannot instantiate interface '{}'",
                class.name()
            )));
        }
        Ok(Self {
            class: class.clone(),
            fields: BTreeMap::new(),
        })
    }

    /// Builder-style field assignment
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The instance's concrete class
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Read a field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Write a field, returning the previous value
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// All fields in name order
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Instance-of check against a descriptor
    pub fn is_a(&self, target: &ClassDef) -> bool {
        self.class.is_a(target)
    }
}
