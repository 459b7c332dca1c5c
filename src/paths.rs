//! Path arithmetic for the report tree.
//!
//! Tree positions are addressed by [`NodePath`], a list of segments derived from
//! fully-qualified class names. Artifact files are addressed by lexically
//! normalized [`PathBuf`]s relative to the scan root.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Position of a node in the report hierarchy.
///
/// Segments are never empty. The empty path is the root marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// Build a path from raw segments, dropping empty or blank ones.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = segments
            .into_iter()
            .filter(|s| !s.as_ref().trim().is_empty())
            .map(|s| s.as_ref().to_string())
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Trailing segment, `None` for the root marker
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Parent position.
    ///
    /// Top-level paths (a single segment) and the root marker have no parent:
    /// the hierarchy is anchored at the first package segment.
    pub fn parent(&self) -> Option<NodePath> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self { segments: self.segments[..self.segments.len() - 1].to_vec() })
    }

    /// All proper ancestors, nearest first, excluding the root marker.
    pub fn ancestors(&self) -> impl Iterator<Item = NodePath> + '_ {
        (1..self.segments.len()).rev().map(move |len| Self { segments: self.segments[..len].to_vec() })
    }

    /// First segment as a path of its own
    pub fn top_level(&self) -> Option<NodePath> {
        self.segments.first().map(|s| Self { segments: vec![s.clone()] })
    }

    /// Append a (possibly slash-separated) child path.
    pub fn join(&self, child: &str) -> NodePath {
        let mut segments = self.segments.clone();
        segments.extend(child.split('/').filter(|s| !s.trim().is_empty()).map(str::to_string));
        Self { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() { write!(f, ".") } else { write!(f, "{}", self.segments.join("/")) }
    }
}

/// Convert a fully-qualified class name into a hierarchy position.
///
/// Package components become segments, and nested classes (`Outer$Inner`) add one
/// segment per class. A blank name yields the root marker.
pub fn class_path_from_class_name(class_name: &str) -> NodePath {
    let (package_part, class_part) = match class_name.rfind('.') {
        Some(idx) => (&class_name[..idx], &class_name[idx + 1..]),
        None => ("", class_name),
    };
    NodePath::from_segments(package_part.split('.').chain(class_part.split('$')))
}

/// Resolve a table reference against the directory holding its class descriptor.
///
/// Returns `None` for a missing or blank table path.
pub fn resolve_table_resource(class_resource: Option<&Path>, table_path: Option<&str>) -> Option<PathBuf> {
    let table_path = table_path.filter(|p| !p.trim().is_empty())?;
    let relative = Path::new(table_path);
    let resolved = match class_resource.and_then(Path::parent) {
        Some(base_dir) => base_dir.join(relative),
        None => relative.to_path_buf(),
    };
    Some(normalize(&resolved))
}

/// Lexically normalize a path: drop `.` segments and collapse `..` against the
/// preceding normal segment. Leading `..` segments that cannot collapse are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;
