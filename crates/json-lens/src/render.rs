//! Object-like text rendering of JSON values.

use serde_json::Value;

/// Render a JSON value as object-like text with unquoted keys.
///
/// Strings stay quoted, keys do not; containers indent their contents
/// by two spaces per level and empty ones collapse to `[]` / `{}`.
///
/// # Example
///
/// ```
/// use json_lens::render::format_object;
///
/// let doc = serde_json::json!({"a": 1});
/// assert_eq!(format_object(&doc), "{\n  a: 1\n}");
/// ```
pub fn format_object(value: &Value) -> String {
    format_at(value, 0)
}

fn format_at(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => {
            if arr.is_empty() {
                return "[]".to_string();
            }
            let items: Vec<String> = arr
                .iter()
                .map(|item| format!("{}  {}", pad, format_at(item, indent + 1)))
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), pad)
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let entries: Vec<String> = map
                .iter()
                .map(|(key, val)| format!("{}  {}: {}", pad, key, format_at(val, indent + 1)))
                .collect();
            format!("{{\n{}\n{}}}", entries.join(",\n"), pad)
        }
    }
}
