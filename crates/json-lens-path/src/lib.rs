//! Node-path grammar for addressable JSON trees.
//!
//! A node path is a string address rooted at the literal segment `root`.
//! Object keys append as dot-steps (`.key`), array indices as
//! bracket-steps (`[n]`) with no dot before the bracket: `root`,
//! `root.a.b`, `root[0]`, `root.a[2].b`.
//!
//! # Example
//!
//! ```
//! use json_lens_path::{tokenize, format_path, get, Step};
//!
//! // Tokenize a path string into steps
//! let steps = tokenize("root.a[2].b").unwrap();
//! assert_eq!(steps, vec![Step::key("a"), Step::index(2), Step::key("b")]);
//!
//! // Format steps back to a path string
//! assert_eq!(format_path(&steps), "root.a[2].b");
//!
//! // Walk a JSON document by steps
//! let doc = serde_json::json!({"a": [0, 0, {"b": 42}]});
//! assert_eq!(get(&doc, &steps), Some(&serde_json::json!(42)));
//! ```

use serde_json::Value;

pub mod types;
pub use types::{Path, Step};

/// The synthetic root segment every path starts with.
pub const ROOT: &str = "root";

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Tokenize a path string into steps.
///
/// The leading `root` segment is stripped; `"root"` alone yields an empty
/// step list. Dot-steps whose text is entirely decimal digits become
/// index steps. Returns `None` for anything that does not match the
/// grammar: a missing `root` prefix, an empty segment, an unclosed or
/// non-numeric bracket, or stray characters between steps.
///
/// # Example
///
/// ```
/// use json_lens_path::{tokenize, Step};
///
/// assert_eq!(tokenize("root"), Some(vec![]));
/// assert_eq!(tokenize("root.a.b"), Some(vec![Step::key("a"), Step::key("b")]));
/// assert_eq!(tokenize("root[0]"), Some(vec![Step::index(0)]));
/// assert_eq!(tokenize("root.0"), Some(vec![Step::index(0)]));
/// assert_eq!(tokenize("rooted"), None);
/// assert_eq!(tokenize("root[x]"), None);
/// ```
pub fn tokenize(path: &str) -> Option<Path> {
    let rest = path.strip_prefix(ROOT)?;
    let bytes = rest.as_bytes();
    let mut steps = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                pos += 1;
                let start = pos;
                while pos < bytes.len() && !matches!(bytes[pos], b'.' | b'[' | b']') {
                    pos += 1;
                }
                if pos == start {
                    return None;
                }
                let text = &rest[start..pos];
                let step = if is_digits(text) {
                    Step::Index(text.parse().ok()?)
                } else {
                    Step::Key(text.to_string())
                };
                steps.push(step);
            }
            b'[' => {
                pos += 1;
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                if pos == start || pos == bytes.len() || bytes[pos] != b']' {
                    return None;
                }
                steps.push(Step::Index(rest[start..pos].parse().ok()?));
                pos += 1;
            }
            // A step must start with '.' or '['; anything else (including
            // a stray ']') makes the whole path malformed.
            _ => return None,
        }
    }

    Some(steps)
}

/// Format steps back into a path string.
///
/// Inverse of [`tokenize`] for well-formed paths, except that a
/// digit-only key re-tokenizes as an index step.
///
/// # Example
///
/// ```
/// use json_lens_path::{format_path, Step};
///
/// assert_eq!(format_path(&[]), "root");
/// assert_eq!(format_path(&[Step::key("a"), Step::index(0)]), "root.a[0]");
/// ```
pub fn format_path(steps: &[Step]) -> String {
    let mut out = String::from(ROOT);
    for step in steps {
        match step {
            Step::Key(key) => {
                out.push('.');
                out.push_str(key);
            }
            Step::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Append one step to a path string.
///
/// # Example
///
/// ```
/// use json_lens_path::{push_step, Step};
///
/// assert_eq!(push_step("root", &Step::key("a")), "root.a");
/// assert_eq!(push_step("root.a", &Step::index(2)), "root.a[2]");
/// ```
pub fn push_step(path: &str, step: &Step) -> String {
    match step {
        Step::Key(key) => format!("{}.{}", path, key),
        Step::Index(index) => format!("{}[{}]", path, index),
    }
}

/// Check if a path string addresses the whole document.
///
/// # Example
///
/// ```
/// use json_lens_path::is_root;
///
/// assert!(is_root("root"));
/// assert!(!is_root("root.a"));
/// ```
pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Get a value from a JSON document by steps.
///
/// Index steps descend arrays only and key steps descend objects only;
/// any kind mismatch or missing target yields `None`.
///
/// # Example
///
/// ```
/// use json_lens_path::{get, Step};
/// use serde_json::json;
///
/// let doc = json!({"a": [10, 20]});
/// assert_eq!(get(&doc, &[Step::key("a"), Step::index(1)]), Some(&json!(20)));
/// assert_eq!(get(&doc, &[Step::key("missing")]), None);
/// assert_eq!(get(&doc, &[Step::index(0)]), None);
/// ```
pub fn get<'a>(doc: &'a Value, steps: &[Step]) -> Option<&'a Value> {
    let mut current = doc;
    for step in steps {
        match current {
            Value::Array(arr) => match step {
                Step::Index(index) => current = arr.get(*index)?,
                Step::Key(_) => return None,
            },
            Value::Object(map) => match step {
                Step::Key(key) => current = map.get(key)?,
                Step::Index(_) => return None,
            },
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by steps.
///
/// Same descent rules as [`get`].
pub fn get_mut<'a>(doc: &'a mut Value, steps: &[Step]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in steps {
        match current {
            Value::Array(arr) => match step {
                Step::Index(index) => current = arr.get_mut(*index)?,
                Step::Key(_) => return None,
            },
            Value::Object(map) => match step {
                Step::Key(key) => current = map.get_mut(key)?,
                Step::Index(_) => return None,
            },
            _ => return None,
        }
    }
    Some(current)
}
