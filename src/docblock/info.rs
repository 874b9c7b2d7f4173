//! The typed record produced by the tag interpreter.

use std::collections::BTreeMap;

/// A documented `@param`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDoc {
    /// Parameter name without the `$` prefix.
    pub name: String,
    /// Documented type, namespace-qualified (`"mixed"` when omitted).
    pub type_name: String,
    /// Free text following the name.
    pub description: String,
}

/// Parsed representation of one PHPDoc comment.
///
/// Built by [`parse_doc_info`](super::parse_doc_info); read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocInfo {
    pub(super) description: String,
    pub(super) params: Vec<ParamDoc>,
    pub(super) return_type: String,
    pub(super) return_description: String,
    pub(super) example: String,
    pub(super) deprecated: Option<String>,
    pub(super) see: Vec<String>,
    pub(super) inherit_doc: bool,
    pub(super) ignore: bool,
    pub(super) internal: bool,
    pub(super) other_tags: BTreeMap<String, Vec<String>>,
}

impl DocInfo {
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Documented parameters, in comment order.
    pub fn params(&self) -> &[ParamDoc] {
        &self.params
    }

    /// Look up a documented parameter by name (with or without `$`).
    pub fn param(&self, name: &str) -> Option<&ParamDoc> {
        let name = name.trim_start_matches('$');
        self.params.iter().find(|p| p.name == name)
    }

    /// The `@return` type, empty when the tag is absent.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Text following the `@return` type.
    pub fn return_description(&self) -> &str {
        &self.return_description
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    /// `Some` whenever `@deprecated` is present, even without a message.
    pub fn deprecation_message(&self) -> Option<&str> {
        self.deprecated.as_deref()
    }

    /// `@see` references: markdown links for URLs, plain text otherwise.
    pub fn see(&self) -> &[String] {
        &self.see
    }

    pub fn should_inherit_doc(&self) -> bool {
        self.inherit_doc
    }

    pub fn should_be_ignored(&self) -> bool {
        self.ignore
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// Values of every occurrence of a tag that has no typed field
    /// (`@package`, `@todo`, `@author`, ...).
    pub fn tag_values(&self, tag: &str) -> &[String] {
        self.other_tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries of every `@todo` tag.
    pub fn todos(&self) -> &[String] {
        self.tag_values("todo")
    }

    /// Names of the untyped tags present in the comment.
    pub fn other_tag_names(&self) -> impl Iterator<Item = &str> {
        self.other_tags.keys().map(String::as_str)
    }

    fn upsert_param(&mut self, param: ParamDoc) {
        match self.params.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => *existing = param,
            None => self.params.push(param),
        }
    }

    pub(super) fn set_params(&mut self, params: Vec<ParamDoc>) {
        for param in params {
            self.upsert_param(param);
        }
    }
}
