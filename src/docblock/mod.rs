//! PHPDoc block parsing.
//!
//! This module turns raw `/** ... */` comments into [`DocInfo`] records:
//! the description, `@param` / `@return` types, `@see` references,
//! `@example` code, `@deprecated` messages and the `@inheritDoc`,
//! `@ignore` and `@internal` flags.  Any other tag is kept verbatim.
//!
//! # Submodules
//!
//! - [`tokenizer`]: comment cleaning and splitting into tagged segments.
//! - [`tags`]: interpretation of segments into a [`DocInfo`].
//! - [`info`]: the [`DocInfo`] record itself.
//! - [`types`]: type-string classification and namespace qualification
//!   (`is_class_reference`, `sanitize_declaration`, ...).

pub mod info;
pub mod tags;
pub mod tokenizer;
pub mod types;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use info::{DocInfo, ParamDoc};
pub use tags::{parse_doc_info, parse_param, parse_see};
pub use tokenizer::{Segment, clean_comment, tokenize};
pub use types::{
    NATIVE_TYPES, TYPE_SEPARATOR, is_class_reference, is_native_type, join_candidates,
    qualify_type, sanitize_declaration, split_candidates,
};
