//! Structural edits addressed by node path.
//!
//! Both operations clone the document once up front and mutate only the
//! clone, so the caller's value is never touched. Unresolvable paths
//! degrade to returning the clone unchanged rather than failing; the
//! only caller-visible error is a rename aimed at an array element.

use json_lens_path::{get_mut, is_root, tokenize, Step};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// Array elements carry no renamable key.
    #[error("cannot rename an array element")]
    ArrayElement,
}

/// Delete the value addressed by `path`, returning the edited document.
///
/// An index step removes that element from its array, shifting later
/// elements down by one. A key step removes that entry from its object,
/// keeping the remaining keys in their original order. The root path,
/// malformed paths, missing targets, and kind mismatches all return the
/// clone unchanged.
///
/// # Example
///
/// ```
/// use json_lens::edit::delete_at;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": 2});
/// assert_eq!(delete_at("root.a", &doc), json!({"b": 2}));
/// assert_eq!(delete_at("root.missing.deep", &doc), doc);
/// ```
pub fn delete_at(path: &str, doc: &Value) -> Value {
    let mut out = doc.clone();
    if is_root(path) {
        return out;
    }
    let steps = match tokenize(path) {
        Some(steps) => steps,
        None => return out,
    };
    let (last, parents) = match steps.split_last() {
        Some(split) => split,
        None => return out,
    };
    let parent = match get_mut(&mut out, parents) {
        Some(parent) => parent,
        None => return out,
    };
    match parent {
        Value::Object(map) => {
            if let Step::Key(key) = last {
                // shift_remove, not remove: the latter swaps the last
                // entry into the hole and breaks sibling order
                map.shift_remove(key);
            }
        }
        Value::Array(arr) => {
            if let Step::Index(index) = last {
                if *index < arr.len() {
                    arr.remove(*index);
                }
            }
        }
        _ => {}
    }
    out
}

/// Rename the object key addressed by `path`, returning the edited
/// document.
///
/// The parent object is rebuilt entry by entry so the renamed key keeps
/// the ordinal position its old name held and every other entry stays
/// put. A path ending in an index step is rejected with
/// [`RenameError::ArrayElement`]; all other resolution failures (root
/// path, malformed path, missing key, non-object parent) return the
/// clone unchanged. Validating the new key text is the caller's job.
///
/// # Example
///
/// ```
/// use json_lens::edit::rename_key_at;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": 2, "c": 3});
/// let out = rename_key_at("root.b", "z", &doc).unwrap();
/// let keys: Vec<&str> = out.as_object().unwrap().keys().map(|k| k.as_str()).collect();
/// assert_eq!(keys, vec!["a", "z", "c"]);
/// ```
pub fn rename_key_at(path: &str, new_key: &str, doc: &Value) -> Result<Value, RenameError> {
    let mut out = doc.clone();
    if is_root(path) {
        return Ok(out);
    }
    let steps = match tokenize(path) {
        Some(steps) => steps,
        None => return Ok(out),
    };
    let (last, parents) = match steps.split_last() {
        Some(split) => split,
        None => return Ok(out),
    };
    let old_key = match last {
        Step::Key(key) => key,
        Step::Index(_) => return Err(RenameError::ArrayElement),
    };
    let map = match get_mut(&mut out, parents) {
        Some(Value::Object(map)) => map,
        _ => return Ok(out),
    };
    if !map.contains_key(old_key) {
        return Ok(out);
    }

    let entries = std::mem::take(map);
    let mut renamed = Map::with_capacity(entries.len());
    for (key, value) in entries {
        if key == *old_key {
            renamed.insert(new_key.to_string(), value);
        } else {
            renamed.insert(key, value);
        }
    }
    *map = renamed;
    Ok(out)
}
