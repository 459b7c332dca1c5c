//! Page contexts handed to the renderers.
//!
//! A context is the node's own resource with `name` added. Index contexts also
//! carry `contents`: one entry per child with its `name`, `type`, relative
//! `path` and optional `title`, nested as deep as the configured index depth.

use crate::config::IndexDepth;
use crate::types::{Document, IndexNode, ReportNode, TableNode};
use serde_json::{Value, json};

pub fn index_context(index: &IndexNode, index_depth: IndexDepth) -> Document {
    let mut context = index.resource.clone().unwrap_or_default();
    context.insert("name".to_string(), json!(index.name));
    context.insert("contents".to_string(), Value::Array(contents(&index.children, &index.out_path, 1, index_depth)));
    context
}

pub fn table_context(table: &TableNode) -> Document {
    let mut context = table.resource.clone().unwrap_or_default();
    context.insert("name".to_string(), json!(table.name));
    context
}

fn contents(children: &[ReportNode], base_out_path: &str, depth: usize, index_depth: IndexDepth) -> Vec<Value> {
    children
        .iter()
        .map(|child| {
            let mut entry = Document::new();
            entry.insert("name".to_string(), json!(child.name()));
            entry.insert("type".to_string(), json!(child.type_name()));
            entry.insert("path".to_string(), json!(relative_path(base_out_path, child.out_path())));

            if let Some(title) = child.resource().and_then(|resource| resource.get("title")) {
                entry.insert("title".to_string(), title.clone());
            }

            if child.is_index() && index_depth.includes(depth + 1) {
                let nested = contents(child.children(), base_out_path, depth + 1, index_depth);
                if !nested.is_empty() {
                    entry.insert("contents".to_string(), Value::Array(nested));
                }
            }

            Value::Object(entry)
        })
        .collect()
}

/// Path of `out_path` seen from the directory of the index at `base_out_path`.
///
/// Descendant out paths always extend the index's own, so stripping the
/// prefix leaves `/segment...`.
pub fn relative_path(base_out_path: &str, out_path: &str) -> String {
    let relative = out_path.strip_prefix(base_out_path).unwrap_or(out_path);
    format!("./{}", relative.trim_start_matches('/'))
}
