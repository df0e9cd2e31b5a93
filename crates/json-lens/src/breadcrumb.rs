//! Breadcrumb trails for selected paths.

use json_lens_path::{tokenize, Step};
use serde_json::Value;

const SEPARATOR: &str = " > ";

/// Format a selected path as a human-readable trail.
///
/// Key steps render as bare text and index steps keep their brackets,
/// joined by `" > "`. Returns an empty string when either argument is
/// absent (a null document counts as absent), when the path does not
/// parse, or when nothing remains after the root segment.
///
/// # Example
///
/// ```
/// use json_lens::breadcrumb::format_breadcrumb;
/// use serde_json::json;
///
/// let doc = json!({"auto": {"driver_types": [{"name": "standard"}]}});
/// assert_eq!(
///     format_breadcrumb(Some("root.auto.driver_types[0].name"), Some(&doc)),
///     "auto > driver_types > [0] > name"
/// );
/// assert_eq!(format_breadcrumb(Some("root"), Some(&doc)), "");
/// ```
pub fn format_breadcrumb(path: Option<&str>, doc: Option<&Value>) -> String {
    let path = match path {
        Some(path) => path,
        None => return String::new(),
    };
    match doc {
        None | Some(Value::Null) => return String::new(),
        Some(_) => {}
    }
    let steps = match tokenize(path) {
        Some(steps) => steps,
        None => return String::new(),
    };

    let segments: Vec<String> = steps
        .iter()
        .map(|step| match step {
            Step::Key(key) => key.clone(),
            Step::Index(index) => format!("[{}]", index),
        })
        .collect();
    segments.join(SEPARATOR)
}
