//! Command-line tools for inspecting and editing JSON by node path.
//!
//! Provides the core logic used by the binary entry points:
//! - `lens-tree`   — project a document into its node tree
//! - `lens-view`   — render a document with a breadcrumb header
//! - `lens-delete` — delete the node at a path
//! - `lens-rename` — rename the object key at a path

use serde_json::Value;

use crate::breadcrumb::format_breadcrumb;
use crate::edit::{delete_at, rename_key_at, RenameError};
use crate::render::format_object;
use crate::tree::project;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Rename(RenameError),
    EmptyKey,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)   => write!(f, "{e}"),
            CliError::Rename(e) => write!(f, "{e}"),
            CliError::EmptyKey  => write!(f, "key name cannot be empty"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<RenameError> for CliError {
    fn from(e: RenameError) -> Self { CliError::Rename(e) }
}

// ── lens-tree ─────────────────────────────────────────────────────────────

/// Project a JSON document into its node tree.
///
/// Returns the tree as a pretty-printed JSON string, one node per
/// document value with its id, key, kind, and path.
pub fn project_tree(doc_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let tree = project(&doc);
    Ok(serde_json::to_string_pretty(&tree)?)
}

// ── lens-view ─────────────────────────────────────────────────────────────

/// Render a document in expanded block form.
///
/// With a selected path the output opens with a breadcrumb line; the
/// `root` path and malformed paths produce no header.
pub fn view(doc_json: &str, path: Option<&str>) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let body = format_object(&doc);
    let trail = format_breadcrumb(path, Some(&doc));
    if trail.is_empty() {
        Ok(body)
    } else {
        Ok(format!("{}\n\n{}", trail, body))
    }
}

// ── lens-delete ───────────────────────────────────────────────────────────

/// Delete the node at `path` and return the resulting document.
///
/// A path that names nothing, and the `root` path itself, leave the
/// document unchanged.
pub fn delete(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let out = delete_at(path, &doc);
    Ok(serde_json::to_string_pretty(&out)?)
}

// ── lens-rename ───────────────────────────────────────────────────────────

/// Rename the object key at `path` and return the resulting document.
///
/// The new key is trimmed; a blank key and an array-element path are
/// both errors.
pub fn rename(doc_json: &str, path: &str, new_key: &str) -> Result<String, CliError> {
    if new_key.trim().is_empty() {
        return Err(CliError::EmptyKey);
    }
    let doc: Value = serde_json::from_str(doc_json)?;
    let out = rename_key_at(path, new_key.trim(), &doc)?;
    Ok(serde_json::to_string_pretty(&out)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
