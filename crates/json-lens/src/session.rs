//! Editing session: a document, a selection, and an optional
//! persistent mirror.

use serde_json::Value;
use thiserror::Error;

use json_lens_path::{tokenize, Step};

use crate::breadcrumb::format_breadcrumb;
use crate::edit::{delete_at, rename_key_at, RenameError};
use crate::storage::Storage;
use crate::tree::{project, TreeNode};

/// Storage key the session mirrors its document under.
pub const DOCUMENT_KEY: &str = "json-lens.document";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("key name cannot be empty")]
    EmptyKey,
    #[error("no document loaded")]
    NoDocument,
    #[error("rename failed: {0}")]
    Rename(#[from] RenameError),
}

/// One editing session over a single JSON document.
///
/// The session owns the document; every mutation routes through the
/// pure editing core and the previous value is replaced wholesale.
/// With a [`Storage`] attached, each replacement is mirrored to disk
/// and [`Session::restore`] picks it back up on the next run.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<Value>,
    selected: Option<String>,
    storage: Option<Storage>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// A session that mirrors its document into `storage`.
    pub fn with_storage(storage: Storage) -> Self {
        Session {
            document: None,
            selected: None,
            storage: Some(storage),
        }
    }

    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Loads the persisted document, if an earlier run saved one.
    pub fn restore(&mut self) {
        let Some(storage) = &self.storage else { return };
        if let Some(doc) = storage.get(DOCUMENT_KEY) {
            tracing::info!("restored persisted document");
            self.document = Some(doc);
        }
    }

    /// Parses `text` and replaces the current document with the result.
    ///
    /// A parse failure leaves the existing document untouched.
    pub fn import_text(&mut self, text: &str) -> Result<(), SessionError> {
        let doc: Value = serde_json::from_str(text)?;
        tracing::info!("imported document ({} bytes)", text.len());
        self.replace_document(Some(doc));
        Ok(())
    }

    pub fn set_document(&mut self, doc: Value) {
        self.replace_document(Some(doc));
    }

    /// Drops the document, the selection, and the persisted mirror.
    pub fn clear_document(&mut self) {
        self.selected = None;
        self.replace_document(None);
    }

    /// Selects the node at `path`, or clears the selection when `path`
    /// is already selected.
    pub fn toggle_select(&mut self, path: &str) {
        if self.selected.as_deref() == Some(path) {
            self.selected = None;
        } else {
            self.selected = Some(path.to_string());
        }
    }

    pub fn select(&mut self, path: impl Into<String>) {
        self.selected = Some(path.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Tree projection of the current document, if one is loaded.
    pub fn tree(&self) -> Option<TreeNode> {
        self.document.as_ref().map(project)
    }

    /// Breadcrumb trail for the current selection.
    pub fn breadcrumb(&self) -> String {
        format_breadcrumb(self.selected.as_deref(), self.document.as_ref())
    }

    /// Deletes the node at `path` and persists the result.
    pub fn delete_node(&mut self, path: &str) -> Result<(), SessionError> {
        let Some(doc) = &self.document else {
            return Err(SessionError::NoDocument);
        };
        let updated = delete_at(path, doc);
        tracing::info!("deleted node at {}", path);
        self.replace_document(Some(updated));
        Ok(())
    }

    /// Renames the object key addressed by `path` to `new_key`.
    ///
    /// The proposed key is trimmed before use. Renaming a key to
    /// itself succeeds without touching the document.
    pub fn rename_node(&mut self, path: &str, new_key: &str) -> Result<(), SessionError> {
        if new_key.trim().is_empty() {
            return Err(SessionError::EmptyKey);
        }
        if let Some(steps) = tokenize(path) {
            if let Some(Step::Key(current)) = steps.last() {
                if new_key == current.as_str() {
                    return Ok(());
                }
            }
        }
        let Some(doc) = &self.document else {
            return Err(SessionError::NoDocument);
        };
        let updated = rename_key_at(path, new_key.trim(), doc)?;
        tracing::info!("renamed key at {} to {:?}", path, new_key.trim());
        self.replace_document(Some(updated));
        Ok(())
    }

    fn replace_document(&mut self, doc: Option<Value>) {
        self.document = doc;
        self.persist();
    }

    // Mirror failures are logged and swallowed: losing the mirror must
    // not lose the in-memory edit.
    fn persist(&self) {
        let Some(storage) = &self.storage else { return };
        let result = match &self.document {
            Some(doc) => storage.set(DOCUMENT_KEY, doc),
            None => storage.remove(DOCUMENT_KEY),
        };
        if let Err(err) = result {
            tracing::warn!("failed to mirror document to storage: {}", err);
        }
    }
}
