//! Introspection descriptors.
//!
//! These are the read-only inputs of the documentation engine: a
//! pre-parsed picture of each PHP class, interface and method, as a
//! runtime reflection API would report it.  They deserialize from JSON so
//! that any producer (a PHP reflection dump, a static analyser, a test
//! fixture) can feed the engine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::util::namespace_of;

/// Visibility of a class member as declared in source.
///
/// In PHP, members without an explicit visibility modifier default to `Public`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A declared (native) type hint.
///
/// Either a single name (`"int"`, `"?Foo"`, `"Foo|Bar"`) or the member
/// list of a union type (`["int", "string"]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DeclaredType {
    Named(String),
    Union(Vec<String>),
}

impl DeclaredType {
    /// The member names of the type; a single name yields one member
    /// unless it is written with `|`.
    pub fn members(&self) -> Vec<&str> {
        match self {
            DeclaredType::Named(name) => name
                .split('|')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .collect(),
            DeclaredType::Union(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }
}

/// The default value of a parameter, when it can be introspected.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DefaultValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Array,
    /// A constant expression, rendered verbatim (e.g. `self::LIMIT`).
    Constant(String),
}

impl DefaultValue {
    /// Markdown rendering of the value as shown next to the parameter.
    pub fn render(&self) -> String {
        match self {
            DefaultValue::String(s) => format!("`'{}'`", s),
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Float(f) => f.to_string(),
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Null => "null".to_string(),
            DefaultValue::Array => "[]".to_string(),
            DefaultValue::Constant(expr) => expr.clone(),
        }
    }

    /// The type implied by the value, for parameters that declare and
    /// document no type at all.
    pub fn implied_type(&self) -> Option<&'static str> {
        match self {
            DefaultValue::String(_) => Some("string"),
            DefaultValue::Bool(_) => Some("bool"),
            DefaultValue::Array => Some("array"),
            _ => None,
        }
    }
}

/// Stores introspected parameter information.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParameterDescriptor {
    /// The parameter name, with or without the `$` prefix.
    pub name: String,
    /// Optional declared type hint.
    #[serde(default, rename = "type")]
    pub type_hint: Option<DeclaredType>,
    /// The default value, if the parameter has one and it is introspectable.
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl ParameterDescriptor {
    /// The parameter name without the `$` prefix.
    pub fn bare_name(&self) -> &str {
        self.name.trim().trim_start_matches('$')
    }
}

/// Stores introspected method information.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MethodDescriptor {
    /// The method name (e.g. "updateText").
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_final: bool,
    /// The class that declares the method.  Reflection also reports
    /// inherited methods; those carry their ancestor's name here.
    /// Defaults to the owning class.
    #[serde(default)]
    pub declaring_class: Option<String>,
    /// The raw `/** ... */` comment, if any.
    #[serde(default)]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Optional declared return type (may be a union).
    #[serde(default)]
    pub return_type: Option<DeclaredType>,
}

/// Stores introspected class or interface information.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassDescriptor {
    /// The fully-qualified class name (e.g. "Acme\\ExampleClass").
    pub name: String,
    #[serde(default)]
    pub is_interface: bool,
    #[serde(default)]
    pub is_abstract: bool,
    /// Whether the class ships with the PHP runtime (no source file).
    #[serde(default)]
    pub is_builtin: bool,
    /// The direct parent class, if any.
    #[serde(default)]
    pub extends: Option<String>,
    /// Directly implemented interfaces (for an interface: the interfaces
    /// it extends).
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Path of the declaring source file.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Inline source text, used instead of `file` when present.
    #[serde(default)]
    pub source: Option<String>,
    /// The raw class-level `/** ... */` comment, if any.
    #[serde(default)]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// A bare descriptor for a class with nothing but a name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_interface: false,
            is_abstract: false,
            is_builtin: false,
            extends: None,
            interfaces: Vec::new(),
            file: None,
            source: None,
            doc_comment: None,
            methods: Vec::new(),
        }
    }

    /// The namespace the class is declared in (no leading `\`).
    pub fn namespace(&self) -> &str {
        namespace_of(&self.name)
    }
}

/// The top-level shape of a descriptor JSON document: either a bare list
/// of classes or an object with a `classes` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DescriptorDocument {
    Wrapped { classes: Vec<ClassDescriptor> },
    List(Vec<ClassDescriptor>),
}

impl DescriptorDocument {
    pub fn into_classes(self) -> Vec<ClassDescriptor> {
        match self {
            DescriptorDocument::Wrapped { classes } | DescriptorDocument::List(classes) => classes,
        }
    }
}
