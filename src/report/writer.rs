//! Writing rendered pages to the output directory.
//!
//! An index node becomes `<out>/<out_path>/index.<ext>` and a table node
//! becomes `<out>/<out_path>.<ext>`. The root index, whose out path is empty,
//! lands directly in the output directory.

use super::context::{index_context, table_context};
use super::render::{render_index, render_table};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::types::{ReportNode, ReportResult};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Render every node of `root` and write one page per node.
pub fn write_report(root: &ReportNode, config: &ReportConfig) -> Result<ReportResult> {
    let count = write_node(root, config)?;
    debug!("Wrote {} page(s) to {:?}", count, config.output_dir);
    Ok(ReportResult::success(count))
}

fn write_node(node: &ReportNode, config: &ReportConfig) -> Result<usize> {
    let path = page_path(&config.output_dir, node, config.format.extension());
    match node {
        ReportNode::Index(index) => {
            let content = render_index(config.format, &index_context(index, config.index_depth));
            write_page(&path, &content)?;
            let mut count = 1;
            for child in &index.children {
                count += write_node(child, config)?;
            }
            Ok(count)
        }
        ReportNode::Table(table) => {
            write_page(&path, &render_table(config.format, &table_context(table)))?;
            Ok(1)
        }
    }
}

/// File that the page for `node` is written to.
pub fn page_path(output_dir: &Path, node: &ReportNode, extension: &str) -> PathBuf {
    let relative = node.out_path().trim_start_matches('/');
    match node {
        ReportNode::Index(_) => output_dir.join(relative).join(format!("index.{}", extension)),
        ReportNode::Table(_) => output_dir.join(format!("{}.{}", relative, extension)),
    }
}

fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| ReportError::io(path, e))?;
    debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
