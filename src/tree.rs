//! Report tree construction.
//!
//! Class descriptors and the table artifacts they reference are turned into
//! node entries keyed by [`NodePath`]. Missing intermediate packages are
//! synthesized, the tree is anchored at the deepest path shared by every entry
//! (or at an anonymous root when there is none), and each node gets an output
//! path made of the lower-cased names between the anchor and the node.
//!
//! # Tie-breaks
//!
//! - Two entries at the same position: the first one carrying a resource wins.
//! - Table references without a slug, or whose file was not loaded, are dropped.
//! - A class descriptor always yields an index node, even with no tables.
//! - Index children are ordered by name, unnamed first, then byte order.

use crate::descriptor::parse_class_descriptor;
use crate::error::{ReportError, Result};
use crate::loader;
use crate::paths::{self, NodePath};
use crate::scanner;
use crate::types::{ClassDescriptor, Document, IndexNode, ReportNode, Source, TableNode, TableReference};
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Scan `dir` for artifacts, load them, and build the report tree.
///
/// Returns `Ok(None)` when no valid class descriptor was found.
pub fn process(dir: Option<&Path>) -> Result<Option<ReportNode>> {
    let dir = dir.ok_or_else(|| ReportError::InvalidArgument("argument `dir` cannot be null".to_string()))?;
    let files = scanner::find_artifact_files(dir)?;
    let sources = loader::load_sources(dir, &files)?;
    Ok(build_tree(&sources))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Class,
    Table,
    Synthetic,
}

/// One position in the hierarchy, with or without backing metadata
#[derive(Debug, Clone)]
struct NodeEntry {
    path: NodePath,
    name: Option<String>,
    resource: Option<Document>,
    kind: EntryKind,
}

impl NodeEntry {
    fn synthetic(path: NodePath) -> Self {
        let name = path.file_name().map(str::to_string);
        Self { path, name, resource: None, kind: EntryKind::Synthetic }
    }
}

type NodesByPath = BTreeMap<NodePath, NodeEntry>;

/// Build the report tree from already loaded sources.
pub fn build_tree(sources: &[Source]) -> Option<ReportNode> {
    if sources.is_empty() {
        return None;
    }

    let documents_by_path = index_by_path(sources);

    let content_entries: Vec<NodeEntry> = sources
        .iter()
        .filter_map(parse_class_descriptor)
        .flat_map(|descriptor| node_entries(&descriptor, &documents_by_path))
        .collect();

    if content_entries.is_empty() {
        debug!("No class descriptors among {} source(s)", sources.len());
        return None;
    }

    let nodes_by_path = build_node_map(&content_entries);

    let root = match find_common_root(&content_entries) {
        Some(common_root) => {
            debug!("Anchoring report tree at {}", common_root);
            build_node(&common_root, Some(&common_root), &nodes_by_path)
        }
        None => {
            debug!("No common root, using a synthetic root");
            build_with_synthetic_root(&nodes_by_path)
        }
    };
    debug!("Built report tree with {} node(s)", root.node_count());
    Some(root)
}

/// Index documents by normalized path; the first source wins on collision.
fn index_by_path(sources: &[Source]) -> HashMap<PathBuf, &Document> {
    let mut index = HashMap::new();
    for source in sources {
        index.entry(paths::normalize(&source.path)).or_insert(&source.document);
    }
    index
}

fn node_entries(descriptor: &ClassDescriptor, documents_by_path: &HashMap<PathBuf, &Document>) -> Vec<NodeEntry> {
    let class_path = paths::class_path_from_class_name(&descriptor.class_name);
    if class_path.is_root() {
        debug!("Skipping {:?}: class name {:?} has no segments", descriptor.source_path, descriptor.class_name);
        return Vec::new();
    }

    let class_entry = NodeEntry {
        path: class_path.clone(),
        name: Some(descriptor.slug.clone()),
        resource: Some(descriptor.document.clone()),
        kind: EntryKind::Class,
    };

    let table_entries = descriptor
        .table_refs
        .iter()
        .filter_map(|reference| table_entry(&class_path, &descriptor.source_path, reference, documents_by_path));

    std::iter::once(class_entry).chain(table_entries).collect()
}

fn table_entry(
    class_path: &NodePath,
    source_path: &Path,
    reference: &TableReference,
    documents_by_path: &HashMap<PathBuf, &Document>,
) -> Option<NodeEntry> {
    let Some(slug) = reference.slug.as_ref() else {
        debug!(
            "Dropping table reference {:?} ({:?}) in {:?}: no slug",
            reference.path, reference.method_name, source_path
        );
        return None;
    };

    let resource_path = paths::resolve_table_resource(Some(source_path), Some(&reference.path))?;
    let Some(document) = documents_by_path.get(&resource_path) else {
        debug!("Dropping table reference {:?} in {:?}: {:?} was not found", reference.path, source_path, resource_path);
        return None;
    };

    Some(NodeEntry {
        path: class_path.join(slug),
        name: Some(slug.clone()),
        resource: Some((*document).clone()),
        kind: EntryKind::Table,
    })
}

/// Key entries by path and add a synthetic entry for every missing ancestor.
fn build_node_map(content_entries: &[NodeEntry]) -> NodesByPath {
    let mut nodes_by_path = NodesByPath::new();

    for entry in content_entries {
        match nodes_by_path.get_mut(&entry.path) {
            None => {
                nodes_by_path.insert(entry.path.clone(), entry.clone());
            }
            Some(existing) => {
                if existing.resource.is_none() && entry.resource.is_some() {
                    *existing = entry.clone();
                } else {
                    debug!("Ignoring duplicate entry at {}", entry.path);
                }
            }
        }
    }

    for entry in content_entries {
        for ancestor in entry.path.ancestors() {
            nodes_by_path.entry(ancestor.clone()).or_insert_with(|| NodeEntry::synthetic(ancestor));
        }
    }

    nodes_by_path
}

/// Deepest path that is an ancestor of every content entry.
fn find_common_root(content_entries: &[NodeEntry]) -> Option<NodePath> {
    let mut ancestor_sets = content_entries.iter().map(|entry| entry.path.ancestors().collect::<BTreeSet<_>>());
    let first = ancestor_sets.next()?;
    let common = ancestor_sets.fold(first, |acc, ancestors| acc.intersection(&ancestors).cloned().collect());
    common.into_iter().max_by_key(NodePath::len)
}

fn build_with_synthetic_root(nodes_by_path: &NodesByPath) -> ReportNode {
    let top_level_paths: BTreeSet<NodePath> = nodes_by_path.keys().filter_map(NodePath::top_level).collect();

    let mut children: Vec<ReportNode> =
        top_level_paths.iter().map(|path| build_node(path, None, nodes_by_path)).collect();
    sort_children(&mut children);

    ReportNode::Index(IndexNode { name: None, out_path: String::new(), resource: None, children })
}

fn build_node(node_path: &NodePath, common_root: Option<&NodePath>, nodes_by_path: &NodesByPath) -> ReportNode {
    let entry = nodes_by_path.get(node_path);
    let name = entry.and_then(|e| e.name.clone());
    let resource = entry.and_then(|e| e.resource.clone());
    let out_path = build_out_path(node_path, common_root, nodes_by_path);
    let is_class = entry.is_some_and(|e| e.kind == EntryKind::Class);

    let child_paths: Vec<&NodePath> =
        nodes_by_path.keys().filter(|path| path.parent().as_ref() == Some(node_path)).collect();

    if child_paths.is_empty() && !is_class {
        return ReportNode::Table(TableNode { name, out_path, resource });
    }

    let mut children: Vec<ReportNode> =
        child_paths.into_iter().map(|path| build_node(path, common_root, nodes_by_path)).collect();
    sort_children(&mut children);

    ReportNode::Index(IndexNode { name, out_path, resource, children })
}

/// Stable sort by name; `None` orders before any name.
fn sort_children(children: &mut [ReportNode]) {
    children.sort_by(|a, b| a.name().cmp(&b.name()));
}

/// Output path of `node_path` relative to `common_root`.
///
/// Each segment below the root contributes `/` plus the lower-cased name of the
/// node at that position, or the raw segment when the node is unnamed. Without
/// a common root the whole path contributes.
fn build_out_path(node_path: &NodePath, common_root: Option<&NodePath>, nodes_by_path: &NodesByPath) -> String {
    let start = common_root.map_or(0, NodePath::len);
    let segments = node_path.segments();

    let mut out_path = String::new();
    for depth in start..segments.len() {
        let prefix = NodePath::from_segments(&segments[..=depth]);
        let segment = nodes_by_path.get(&prefix).and_then(|e| e.name.as_deref()).unwrap_or(segments[depth].as_str());
        out_path.push('/');
        out_path.push_str(&segment.to_lowercase());
    }
    out_path
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
