//! Tree projection of JSON documents.

use json_lens_path::{push_step, Step, ROOT};
use serde::Serialize;
use serde_json::{Map, Value};

/// Classification of a projected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    Primitive,
}

/// One node of a projected document tree.
///
/// Nodes are recomputed from scratch on every projection and carry no
/// identity beyond their `path`, which doubles as `id`. Primitives hold
/// their scalar in `value` (explicit null included); containers leave it
/// absent. Empty containers have no `children` either, so expandability
/// must be decided from `kind`, not from children-presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub key: String,
    pub kind: NodeKind,
    pub value: Option<Value>,
    pub children: Option<Vec<TreeNode>>,
    pub path: String,
}

/// Project a JSON document into an addressable tree.
///
/// The document is wrapped in a synthetic root node with key and path
/// `"root"`; its kind matches the document's own classification. Object
/// entries append to the parent path as dot-steps, array elements as
/// bracket-steps, so every node's path tokenizes back into the access
/// chain that reaches it.
///
/// # Example
///
/// ```
/// use json_lens::tree::project;
///
/// let doc = serde_json::json!({"a": [true]});
/// let tree = project(&doc);
/// assert_eq!(tree.path, "root");
/// let children = tree.children.unwrap();
/// assert_eq!(children[0].path, "root.a");
/// assert_eq!(children[0].children.as_ref().unwrap()[0].path, "root.a[0]");
/// ```
pub fn project(doc: &Value) -> TreeNode {
    node(doc, ROOT.to_string(), ROOT.to_string())
}

fn node(value: &Value, key: String, path: String) -> TreeNode {
    match value {
        Value::Array(arr) => TreeNode {
            id: path.clone(),
            key,
            kind: NodeKind::Array,
            value: None,
            children: array_children(arr, &path),
            path,
        },
        Value::Object(map) => TreeNode {
            id: path.clone(),
            key,
            kind: NodeKind::Object,
            value: None,
            children: object_children(map, &path),
            path,
        },
        scalar => TreeNode {
            id: path.clone(),
            key,
            kind: NodeKind::Primitive,
            value: Some(scalar.clone()),
            children: None,
            path,
        },
    }
}

fn array_children(arr: &[Value], parent: &str) -> Option<Vec<TreeNode>> {
    if arr.is_empty() {
        return None;
    }
    Some(
        arr.iter()
            .enumerate()
            .map(|(index, item)| {
                let path = push_step(parent, &Step::index(index));
                node(item, format!("[{}]", index), path)
            })
            .collect(),
    )
}

fn object_children(map: &Map<String, Value>, parent: &str) -> Option<Vec<TreeNode>> {
    if map.is_empty() {
        return None;
    }
    Some(
        map.iter()
            .map(|(key, child)| {
                let path = push_step(parent, &Step::key(key));
                node(child, key.clone(), path)
            })
            .collect(),
    )
}
