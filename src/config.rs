/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Parsing the output format and index depth
/// - Resolving the input and output directories
use crate::cli::CliArgs;
use crate::input_dir;
use crate::report::Format;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

const GENERATED_DOCS_DIR: &str = "generated-docs/tabletest";

/// How many levels of descendants an index page lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexDepth {
    Limited(usize),
    #[default]
    Infinite,
}

impl IndexDepth {
    /// Parse a positive integer or `infinite` (case-insensitive). Blank means infinite.
    pub fn parse(value: &str) -> Result<IndexDepth, String> {
        let trimmed = value.trim().to_lowercase();
        if trimmed.is_empty() || trimmed == "infinite" {
            return Ok(IndexDepth::Infinite);
        }
        let depth: i64 = trimmed
            .parse()
            .map_err(|_| format!("Invalid index depth: '{}'. Expected a positive integer or 'infinite'.", value))?;
        if depth < 1 {
            return Err(format!("Index depth must be at least 1, was: {}", depth));
        }
        Ok(IndexDepth::Limited(depth as usize))
    }

    /// Whether entries at `depth` (1 = immediate children) are listed
    pub fn includes(&self, depth: usize) -> bool {
        match self {
            IndexDepth::Limited(limit) => depth <= *limit,
            IndexDepth::Infinite => true,
        }
    }
}

/// Fully resolved, immutable settings for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: Format,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub index_depth: IndexDepth,
    /// Print the report tree as JSON instead of writing pages
    pub json: bool,
}

/// Build a complete ReportConfig from CLI arguments, relative to the current directory
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    let base_dir = env::current_dir().map_err(|e| format!("Cannot determine current directory: {}", e))?;
    build_report_config_in(args, &base_dir)
}

/// Build a complete ReportConfig from CLI arguments, resolving paths against `base_dir`
///
/// Fails when the format or index depth is invalid, or when no input
/// directory can be found.
pub fn build_report_config_in(args: &CliArgs, base_dir: &Path) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args in {:?}", base_dir);

    let format = Format::parse(&args.format)?;
    let index_depth = args.index_depth.as_deref().map(IndexDepth::parse).transpose()?.unwrap_or_default();

    let resolution = input_dir::resolve(args.input.as_deref(), base_dir, args.junit_output_dir.as_deref());
    let input_dir = resolution.existing_dir().ok_or_else(|| resolution.missing_input_message())?.to_path_buf();
    debug!("Input directory {:?} ({:?})", input_dir, resolution.source);

    let output_dir = match &args.output {
        Some(output) => base_dir.join(output),
        None => build_dir(base_dir).join(GENERATED_DOCS_DIR),
    };
    debug!("Writing {} pages to {:?}", format, output_dir);

    Ok(ReportConfig { format, input_dir, output_dir, index_depth, json: args.json })
}

/// `target` if it exists, else `build` if it exists, else `target`
pub fn build_dir(base_dir: &Path) -> PathBuf {
    ["target", "build"]
        .iter()
        .map(|name| base_dir.join(name))
        .find(|dir| dir.is_dir())
        .unwrap_or_else(|| base_dir.join("target"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
