//! Property tests tying the projection, the path grammar, and the
//! editing core together on generated documents.

use json_lens::breadcrumb::format_breadcrumb;
use json_lens::edit::{delete_at, rename_key_at};
use json_lens::tree::{project, NodeKind, TreeNode};
use json_lens_path::{get, tokenize, Step};
use proptest::prelude::*;
use serde_json::{Map, Value};

// ── Strategies ────────────────────────────────────────────────────────────

// Keys stay clear of '.', '[', ']' and of digit-only text, which the
// grammar reads as an index.
fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn arb_doc() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

fn collect<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    out.push(node);
    if let Some(children) = &node.children {
        for child in children {
            collect(child, out);
        }
    }
}

fn key_final(path: &str) -> bool {
    matches!(
        tokenize(path).and_then(|steps| steps.last().cloned()),
        Some(Step::Key(_))
    )
}

// ── Properties ────────────────────────────────────────────────────────────

proptest! {
    /// Every projected node path tokenizes and resolves back to a value
    /// of the projected kind.
    #[test]
    fn prop_projection_paths_resolve(doc in arb_doc()) {
        let tree = project(&doc);
        let mut nodes = Vec::new();
        collect(&tree, &mut nodes);

        for node in &nodes {
            let steps = tokenize(&node.path);
            prop_assert!(steps.is_some(), "path failed to tokenize: {}", node.path);
            let steps = steps.unwrap();

            let resolved = get(&doc, &steps);
            prop_assert!(resolved.is_some(), "path failed to resolve: {}", node.path);
            let resolved = resolved.unwrap();

            match node.kind {
                NodeKind::Object => prop_assert!(resolved.is_object()),
                NodeKind::Array => prop_assert!(resolved.is_array()),
                NodeKind::Primitive => {
                    prop_assert!(!resolved.is_object() && !resolved.is_array());
                    prop_assert_eq!(node.value.as_ref(), Some(resolved));
                }
            }
            prop_assert_eq!(&node.id, &node.path);
        }
    }

    /// Deleting a projected node removes exactly that entry: key paths
    /// stop resolving, index paths shorten the parent array by one.
    #[test]
    fn prop_delete_removes_the_addressed_entry(
        doc in arb_doc(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = project(&doc);
        let mut nodes = Vec::new();
        collect(&tree, &mut nodes);
        let candidates: Vec<&TreeNode> =
            nodes.iter().filter(|node| node.path != "root").copied().collect();
        prop_assume!(!candidates.is_empty());

        let node = candidates[pick.index(candidates.len())];
        let steps = tokenize(&node.path).unwrap();
        let out = delete_at(&node.path, &doc);

        match steps.last().unwrap() {
            Step::Key(_) => prop_assert!(get(&out, &steps).is_none()),
            Step::Index(_) => {
                let parents = &steps[..steps.len() - 1];
                let before = get(&doc, parents).unwrap().as_array().unwrap().len();
                let after = get(&out, parents).unwrap().as_array().unwrap().len();
                prop_assert_eq!(after, before - 1);
            }
        }
    }

    /// Neither mutation ever touches the input document, byte for byte.
    #[test]
    fn prop_mutations_leave_the_input_intact(
        doc in arb_doc(),
        pick in any::<prop::sample::Index>(),
    ) {
        let before = serde_json::to_string(&doc).unwrap();

        let tree = project(&doc);
        let mut nodes = Vec::new();
        collect(&tree, &mut nodes);
        let node = nodes[pick.index(nodes.len())];

        let _ = delete_at(&node.path, &doc);
        let _ = rename_key_at(&node.path, "zz_renamed", &doc);

        prop_assert_eq!(serde_json::to_string(&doc).unwrap(), before);
    }

    /// Renaming rewrites one key in place and keeps the sibling order.
    #[test]
    fn prop_rename_preserves_sibling_order(
        doc in arb_doc(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = project(&doc);
        let mut nodes = Vec::new();
        collect(&tree, &mut nodes);
        let candidates: Vec<&TreeNode> = nodes
            .iter()
            .filter(|node| node.path != "root" && key_final(&node.path))
            .copied()
            .collect();
        prop_assume!(!candidates.is_empty());

        let node = candidates[pick.index(candidates.len())];
        let steps = tokenize(&node.path).unwrap();
        let (last, parents) = steps.split_last().unwrap();
        let old_key = match last {
            Step::Key(key) => key.clone(),
            Step::Index(_) => unreachable!(),
        };

        // generated keys are at most eight characters, so the new name
        // cannot collide with a sibling
        let out = rename_key_at(&node.path, "zz_renamed", &doc).unwrap();

        let before: Vec<String> =
            get(&doc, parents).unwrap().as_object().unwrap().keys().cloned().collect();
        let after: Vec<String> =
            get(&out, parents).unwrap().as_object().unwrap().keys().cloned().collect();
        let expected: Vec<String> = before
            .iter()
            .map(|key| {
                if *key == old_key {
                    "zz_renamed".to_string()
                } else {
                    key.clone()
                }
            })
            .collect();
        prop_assert_eq!(after, expected);
    }

    /// Deleting an object entry twice is the same as deleting it once.
    #[test]
    fn prop_delete_is_idempotent_for_object_entries(
        doc in arb_doc(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = project(&doc);
        let mut nodes = Vec::new();
        collect(&tree, &mut nodes);
        let candidates: Vec<&TreeNode> = nodes
            .iter()
            .filter(|node| node.path != "root" && key_final(&node.path))
            .copied()
            .collect();
        prop_assume!(!candidates.is_empty());

        let node = candidates[pick.index(candidates.len())];
        let once = delete_at(&node.path, &doc);
        let twice = delete_at(&node.path, &once);
        prop_assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    /// Paths that name nothing leave the document untouched.
    #[test]
    fn prop_unknown_paths_are_noops(doc in arb_doc()) {
        let before = serde_json::to_string(&doc).unwrap();

        let deleted = delete_at("root.zz_missing.deeper", &doc);
        prop_assert_eq!(serde_json::to_string(&deleted).unwrap(), before.as_str());

        let renamed = rename_key_at("root.zz_missing.deeper", "other", &doc).unwrap();
        prop_assert_eq!(serde_json::to_string(&renamed).unwrap(), before.as_str());
    }

    /// Every projected path renders a breadcrumb with one label per
    /// step.
    #[test]
    fn prop_breadcrumb_matches_the_path_depth(
        doc in arb_doc(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = project(&doc);
        let mut nodes = Vec::new();
        collect(&tree, &mut nodes);
        let candidates: Vec<&TreeNode> =
            nodes.iter().filter(|node| node.path != "root").copied().collect();
        prop_assume!(!candidates.is_empty());

        let node = candidates[pick.index(candidates.len())];
        let steps = tokenize(&node.path).unwrap();
        let trail = format_breadcrumb(Some(&node.path), Some(&doc));
        let segments: Vec<&str> = trail.split(" > ").collect();
        prop_assert_eq!(segments.len(), steps.len());
    }
}
