//! JSON export of the report tree.

use crate::types::ReportNode;
use std::io::Write;

/// Write the report tree as pretty-printed JSON, or `null` when there is none.
///
/// Nodes serialize as `{ "type", "name", "outPath", "resource", "contents" }`,
/// with `contents` only present on index nodes.
pub fn export_json_report<W: Write>(tree: Option<&ReportNode>, mut writer: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, &tree)?;
    writeln!(writer)?;
    Ok(())
}
