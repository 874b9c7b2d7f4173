//! Type reconciliation.
//!
//! Merges what a comment *says* a type is with what the introspected
//! signature *declares* it is, producing the one type string stored on
//! the entity model.  Candidates are always separated by a single `/`,
//! class references are namespace-qualified, and `use` aliases are
//! resolved back to the class they import.

use tracing::debug;

use crate::docblock::{
    ParamDoc, is_class_reference, is_native_type, join_candidates, sanitize_declaration,
    split_candidates,
};
use crate::loader::ClassLoader;
use crate::types::{DeclaredType, MethodDescriptor, ParameterDescriptor};
use crate::use_statements::{UseStatement, find_import};
use crate::util::{namespace_of, sanitize_class_name, short_name};

/// Method-name prefixes implying a return value of unknown type.
const MIXED_PREFIXES: &[&str] = &["get", "load", "fetch", "find", "create"];

/// Method-name prefixes implying a boolean return value.
const BOOL_PREFIXES: &[&str] = &["is", "can", "has", "have", "should"];

/// Everything needed to resolve the types of one class's members.
pub struct TypeContext<'a> {
    /// Display name of the class owning the members (`\Acme\Foo`).
    pub class_name: &'a str,
    /// Imports of the file declaring the class.
    pub imports: &'a [UseStatement],
}

impl TypeContext<'_> {
    fn namespace(&self) -> &str {
        namespace_of(self.class_name)
    }
}

// ─── Merging ────────────────────────────────────────────────────────────────

/// Merge a documented type with a declared one.
///
///   - no declared type: the documented type, or `mixed`;
///   - identical types, or declared `array` against documented `Foo[]`:
///     the documented type;
///   - no documented type: the declared type;
///   - same class base name: the (fully-qualified) declared type;
///   - anything else: both, joined with `/`.
pub fn reconcile_types(documented: &str, declared: Option<&str>) -> String {
    let documented = documented.trim();
    let Some(declared) = declared.map(str::trim).filter(|d| !d.is_empty()) else {
        return if documented.is_empty() {
            "mixed".to_string()
        } else {
            documented.to_string()
        };
    };

    if documented == declared || (declared == "array" && documented.ends_with("[]")) {
        return documented.to_string();
    }
    if documented.is_empty() {
        return declared.to_string();
    }
    if short_name(documented) == short_name(declared) {
        return declared.to_string();
    }
    join_candidates([documented, declared])
}

/// Render a declared type as a candidate list.
///
/// `?Foo` gains a `null` candidate, `self`/`static` become the owning
/// class, native names are kept and class names are made absolute.
pub fn normalize_declared(declared: &DeclaredType, owning_class: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for member in declared.members() {
        let (member, nullable) = match member.strip_prefix('?') {
            Some(inner) => (inner, true),
            None => (member, false),
        };
        let lower = member.to_ascii_lowercase();
        if lower == "self" || lower == "static" {
            parts.push(sanitize_class_name(owning_class));
        } else if is_native_type(member) {
            parts.push(member.to_string());
        } else {
            parts.push(sanitize_class_name(member));
        }
        if nullable {
            parts.push("null".to_string());
        }
    }
    join_candidates(parts)
}

/// Guess a return type from a method name alone.
pub fn guess_return_type(method_name: &str) -> &'static str {
    if MIXED_PREFIXES.iter().any(|p| method_name.starts_with(p)) {
        "mixed"
    } else if BOOL_PREFIXES.iter().any(|p| method_name.starts_with(p)) {
        "bool"
    } else {
        "void"
    }
}

/// Whether a documented return type refers to the owning class itself.
pub fn is_self_reference(type_name: &str, method_name: &str) -> bool {
    let type_name = type_name.trim();
    matches!(type_name, "self" | "static" | "$this") || type_name == method_name
}

// ─── Alias resolution ───────────────────────────────────────────────────────

/// Replace bare class candidates with the class the file imports under
/// that name, keeping any trailing `[]`.
///
/// An import shadows a class of the same name in the current namespace.
/// Absolute names and natives are left untouched; the result still needs
/// [`sanitize_declaration`] to qualify what remains.
pub fn resolve_aliases(type_decl: &str, ctx: &TypeContext<'_>) -> String {
    let resolved: Vec<String> = split_candidates(type_decl)
        .map(|candidate| resolve_candidate(candidate, ctx))
        .collect();
    join_candidates(resolved)
}

fn resolve_candidate(candidate: &str, ctx: &TypeContext<'_>) -> String {
    if candidate.starts_with('\\') || candidate.starts_with('?') || !is_class_reference(candidate)
    {
        return candidate.to_string();
    }

    let (base, suffix) = match candidate.strip_suffix("[]") {
        Some(base) => (base, "[]"),
        None => (candidate, ""),
    };

    let (head, tail) = match base.split_once('\\') {
        Some((head, tail)) => (head, Some(tail)),
        None => (base, None),
    };
    let Some(import) = find_import(ctx.imports, head) else {
        return candidate.to_string();
    };

    let path = match tail {
        Some(tail) => format!("{}\\{}", import.path, tail),
        None => import.path.clone(),
    };
    debug!(alias = base, resolved = %path, "resolved type through use statement");
    format!("{}{}", path, suffix)
}

// ─── Entry points ───────────────────────────────────────────────────────────

/// Resolve the return type of a method.
///
/// The documented `@return` type wins; self references are replaced by
/// the owning class, the declared type is merged in, and a missing type
/// is guessed from the method name.
pub fn resolve_return_type(
    documented: &str,
    method: &MethodDescriptor,
    ctx: &TypeContext<'_>,
) -> String {
    let documented = if is_self_reference(documented, &method.name) {
        ctx.class_name.to_string()
    } else {
        documented.trim().to_string()
    };

    let declared = method
        .return_type
        .as_ref()
        .map(|d| normalize_declared(d, ctx.class_name))
        .filter(|d| !d.is_empty());

    let merged = match (&declared, documented.is_empty()) {
        (None, true) => guess_return_type(&method.name).to_string(),
        _ => reconcile_types(&documented, declared.as_deref()),
    };

    sanitize_declaration(&resolve_aliases(&merged, ctx), ctx.namespace())
}

/// Resolve the type of a parameter from its `@param` entry and its
/// declaration.  When neither says anything, the default value's type
/// is used, then `mixed`.
pub fn resolve_param_type(
    doc: Option<&ParamDoc>,
    param: &ParameterDescriptor,
    owning_class: &str,
) -> String {
    let documented = doc.map(|d| d.type_name.as_str()).unwrap_or_default();
    let declared = param
        .type_hint
        .as_ref()
        .map(|d| normalize_declared(d, owning_class))
        .filter(|d| !d.is_empty());

    if documented.is_empty() && declared.is_none() {
        return param
            .default
            .as_ref()
            .and_then(|d| d.implied_type())
            .unwrap_or("mixed")
            .to_string();
    }

    reconcile_types(documented, declared.as_deref())
}

/// Whether a type string names exactly one class, and that class is a
/// built-in one.
pub fn is_native_class_reference(type_decl: &str, loader: &dyn ClassLoader) -> bool {
    let mut candidates = split_candidates(type_decl);
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => {
            is_class_reference(only) && loader.is_builtin_class(only.trim_end_matches("[]"))
        }
        _ => false,
    }
}
