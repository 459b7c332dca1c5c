//! Report generation module - Page contexts, rendering and output.
//!
//! This module handles:
//! - Building page contexts from tree nodes
//! - Rendering index and table pages as AsciiDoc or Markdown
//! - Writing one page per node under the output directory
//! - Export of the report tree as JSON
//!
//! # Module Organization
//!
//! - `format` - Output formats and their file extensions
//! - `context` - Index and table page contexts
//! - `render` - Built-in AsciiDoc and Markdown templates
//! - `writer` - Page paths and file output
//! - `export` - JSON export

mod context;
mod export;
mod format;
mod render;
mod writer;

// Re-export format types
pub use format::{Format, list_formats};

// Re-export writer functions
pub use writer::write_report;

// Re-export export functions
pub use export::export_json_report;
