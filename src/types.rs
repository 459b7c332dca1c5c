/// Core data structures for report tree construction
///
/// This module defines the artifacts read from disk, the class descriptors parsed
/// from them, and the typed node tree handed to page rendering.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A decoded artifact document (YAML mapping with string keys)
pub type Document = serde_json::Map<String, serde_json::Value>;

/// One discovered artifact file and its decoded contents
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Path relative to the scan root
    pub path: PathBuf,
    pub document: Document,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>, document: Document) -> Self {
        Self { path: path.into(), document }
    }
}

/// Reference from a class descriptor to one of its table artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
    /// Artifact path, relative to the directory of the referencing descriptor
    pub path: String,
    pub method_name: Option<String>,
    pub slug: Option<String>,
}

/// Class-level artifact naming a test class and listing its table artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    pub source_path: PathBuf,
    pub document: Document,
    pub class_name: String,
    pub slug: String,
    pub table_refs: Vec<TableReference>,
}

/// A node in the report structure tree.
///
/// Index nodes are pages listing packages, classes or tables; table nodes are
/// pages for a single table test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportNode {
    Index(IndexNode),
    Table(TableNode),
}

/// A package or test class grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexNode {
    pub name: Option<String>,
    pub out_path: String,
    pub resource: Option<Document>,
    #[serde(rename = "contents")]
    pub children: Vec<ReportNode>,
}

/// A single rendered table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableNode {
    pub name: Option<String>,
    pub out_path: String,
    pub resource: Option<Document>,
}

impl ReportNode {
    pub fn name(&self) -> Option<&str> {
        match self {
            ReportNode::Index(node) => node.name.as_deref(),
            ReportNode::Table(node) => node.name.as_deref(),
        }
    }

    pub fn out_path(&self) -> &str {
        match self {
            ReportNode::Index(node) => &node.out_path,
            ReportNode::Table(node) => &node.out_path,
        }
    }

    pub fn resource(&self) -> Option<&Document> {
        match self {
            ReportNode::Index(node) => node.resource.as_ref(),
            ReportNode::Table(node) => node.resource.as_ref(),
        }
    }

    /// Node type as exposed to page templates: "index" or "table"
    pub fn type_name(&self) -> &'static str {
        match self {
            ReportNode::Index(_) => "index",
            ReportNode::Table(_) => "table",
        }
    }

    /// Child nodes; always empty for table nodes
    pub fn children(&self) -> &[ReportNode] {
        match self {
            ReportNode::Index(node) => &node.children,
            ReportNode::Table(_) => &[],
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, ReportNode::Index(_))
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(ReportNode::node_count).sum::<usize>()
    }
}

/// Outcome of a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResult {
    /// Number of documentation files written
    pub files_generated: usize,
    /// Informational message, set when nothing was generated
    pub message: Option<String>,
}

impl ReportResult {
    pub fn empty(input_dir: &std::path::Path) -> Self {
        Self { files_generated: 0, message: Some(format!("No TableTest YAML files found in: {}", input_dir.display())) }
    }

    pub fn success(count: usize) -> Self {
        Self { files_generated: count, message: None }
    }
}
