use crate::config::IndexDepth;
use crate::report::Format;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tabletest-reporter")]
#[command(about = "Generate AsciiDoc or Markdown documentation from TableTest YAML output")]
#[command(version)]
pub struct CliArgs {
    /// Output format: asciidoc or markdown
    #[arg(long, short = 'f', default_value = "asciidoc", value_name = "FORMAT")]
    pub format: String,

    /// Directory containing TABLETEST-*.yaml files
    /// Default: the JUnit reporting output directory, target/junit-jupiter, or build/junit-jupiter
    #[arg(long, short = 'i', value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory to write documentation to
    /// Default: target/generated-docs/tabletest (or build/ when only that exists)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// How many levels of descendants index pages list (a positive number or "infinite")
    #[arg(long, value_name = "DEPTH")]
    pub index_depth: Option<String>,

    /// List the available output formats and exit
    #[arg(long, short = 'l')]
    pub list_formats: bool,

    /// Print the report tree as JSON instead of writing documentation files
    #[arg(long)]
    pub json: bool,

    /// JUnit reporting output directory supplied by the build tool
    #[arg(long, value_name = "DIR")]
    pub junit_output_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument values
    pub fn validate(&self) -> Result<(), String> {
        Format::parse(&self.format)?;

        if let Some(ref depth) = self.index_depth {
            IndexDepth::parse(depth)?;
        }

        if self.json && self.output.is_some() {
            return Err("Cannot specify both --json and --output".to_string());
        }

        Ok(())
    }
}
