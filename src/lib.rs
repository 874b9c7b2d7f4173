//! Markdown API documentation for PHP classes.
//!
//! The crate reads pre-parsed class descriptors (JSON, see
//! [`types`]), parses the PHPDoc comments they carry, reconciles
//! documented and declared types, resolves `@inheritDoc` requests across
//! class hierarchies and renders the result as markdown tables.
//!
//! ```no_run
//! use phpdocs_md::{DescriptorIndex, Documenter, RenderOptions, render_class};
//!
//! let mut index = DescriptorIndex::with_builtins();
//! index.load_file("classes.json".as_ref())?;
//! let documenter = Documenter::new(&index);
//! let class = documenter.document("Acme\\ExampleClass")?;
//! println!("{}", render_class(&class, &RenderOptions::default()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod docblock;
pub mod entity;
pub mod error;
mod inheritance;
pub mod loader;
pub mod reconcile;
pub mod reflector;
pub mod render;
pub mod stubs;
pub mod types;
pub mod use_statements;
pub mod util;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use config::{Config, OutputFormat};
pub use docblock::{DocInfo, ParamDoc, parse_doc_info};
pub use entity::{
    ClassEntity, CodeEntity, DEFAULT_TITLE_FORMAT, Documented, FunctionEntity,
    FunctionVisibility, ParamEntity,
};
pub use error::{ConfigError, DocError, LoadError, Result};
pub use loader::{ClassLoader, DescriptorIndex};
pub use reflector::{DocumentOptions, Documenter, VisibilityFilter};
pub use render::{MarkdownTable, RenderOptions, TableGenerator, render_class};
pub use types::{
    ClassDescriptor, DeclaredType, DefaultValue, MethodDescriptor, ParameterDescriptor, Visibility,
};
pub use use_statements::{UseStatement, parse_use_statements};
