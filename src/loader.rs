/// Class loading.
///
/// The documentation engine never inspects PHP code itself.  Everything it
/// knows about a class comes through a [`ClassLoader`]: a read-only,
/// by-name lookup of [`ClassDescriptor`]s plus access to the source text
/// the class was declared in (for `use` statement extraction).
///
/// [`DescriptorIndex`] is the stock implementation, filled from JSON
/// descriptor documents and pre-seeded with the built-in class stubs.
use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::stubs;
use crate::types::{ClassDescriptor, DescriptorDocument};
use crate::util::class_key;

/// Read-only access to introspected classes.
pub trait ClassLoader: Sync {
    /// Look up a class by name.  Leading `\` and letter case are ignored.
    fn load_class(&self, name: &str) -> Option<&ClassDescriptor>;

    /// The source text the class was declared in.
    ///
    /// The default implementation prefers the descriptor's inline
    /// `source` and falls back to reading its `file`.  Unreadable files
    /// are logged and treated as absent.
    fn source_text(&self, class: &ClassDescriptor) -> Option<String> {
        if let Some(source) = &class.source {
            return Some(source.clone());
        }
        let path = class.file.as_ref()?;
        match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) => {
                warn!(
                    class = %class.name,
                    path = %path.display(),
                    "could not read class source: {}",
                    err
                );
                None
            }
        }
    }

    /// Whether the loader knows a class of this name.
    fn class_exists(&self, name: &str) -> bool {
        self.load_class(name).is_some()
    }

    /// Whether `name` refers to a known built-in (source-less) class.
    fn is_builtin_class(&self, name: &str) -> bool {
        self.load_class(name).is_some_and(|c| c.is_builtin)
    }
}

/// An in-memory map of class descriptors keyed by lowercased FQN.
#[derive(Debug, Clone, Default)]
pub struct DescriptorIndex {
    classes: HashMap<String, ClassDescriptor>,
}

impl DescriptorIndex {
    /// An empty index, without built-in stubs.
    pub fn new() -> Self {
        Self::default()
    }

    /// An index pre-seeded with the [built-in class stubs](crate::stubs).
    pub fn with_builtins() -> Self {
        let mut index = Self::new();
        for descriptor in stubs::builtin_descriptors() {
            index.insert(descriptor);
        }
        index
    }

    /// Add (or replace) a descriptor.
    pub fn insert(&mut self, descriptor: ClassDescriptor) {
        self.classes.insert(class_key(&descriptor.name), descriptor);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse a descriptor JSON document and add every class in it.
    ///
    /// Returns the number of classes added.
    pub fn load_json_str(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let document: DescriptorDocument = serde_json::from_str(json)?;
        let classes = document.into_classes();
        let count = classes.len();
        for class in classes {
            self.insert(class);
        }
        Ok(count)
    }

    /// Read a descriptor JSON file and add every class in it.
    ///
    /// Relative `file` paths inside the document are resolved against the
    /// directory containing the document.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: DescriptorDocument =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let classes = document.into_classes();
        let count = classes.len();
        for mut class in classes {
            if let Some(file) = class.file.take() {
                class.file = Some(if file.is_relative() {
                    base_dir.join(file)
                } else {
                    file
                });
            }
            self.insert(class);
        }

        debug!(path = %path.display(), count, "loaded class descriptors");
        Ok(count)
    }

    /// Build an index from a JSON document, on top of the built-in stubs.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let mut index = Self::with_builtins();
        index.load_json_str(json)?;
        Ok(index)
    }

    /// Build an index from a JSON file, on top of the built-in stubs.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let mut index = Self::with_builtins();
        index.load_file(path)?;
        Ok(index)
    }

    /// Names of every non-built-in class, sorted.
    pub fn documentable_classes(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .classes
            .values()
            .filter(|c| !c.is_builtin)
            .map(|c| c.name.trim_start_matches('\\').to_string())
            .collect();
        names.sort();
        names
    }
}

impl ClassLoader for DescriptorIndex {
    fn load_class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(&class_key(name))
    }
}
