//! Error types.
//!
//! Only three things can stop the documentation engine: an inherit-doc
//! request nobody answers, a class hierarchy that loops back on itself,
//! and a requested class the loader does not know.  Everything else is
//! tolerated and degrades to default values.

use std::path::PathBuf;

/// Result type for documentation operations.
pub type Result<T> = std::result::Result<T, DocError>;

/// Fatal errors raised while documenting a class.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// A method asked for `@inheritDoc` but no ancestor or interface
    /// declares a method of that name.
    #[error("function {method} in {class} tries to inherit docs but no parent method is found")]
    InheritedDocNotFound { class: String, method: String },

    /// The `extends` chain of a class leads back to itself.
    #[error("cyclic inheritance detected while resolving {0}")]
    CyclicInheritance(String),

    /// The requested class is not known to the class loader.
    #[error("class {0} not found")]
    ClassNotFound(String),
}

/// Errors raised while reading descriptor documents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid descriptor document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid method pattern: {0}")]
    Pattern(#[from] regex::Error),
}
