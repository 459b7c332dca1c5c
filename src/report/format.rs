//! Output formats for documentation pages.

use std::fmt;

/// Built-in page format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    AsciiDoc,
    Markdown,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::AsciiDoc, Format::Markdown];

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Format::AsciiDoc => "asciidoc",
            Format::Markdown => "markdown",
        }
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Format::AsciiDoc => "adoc",
            Format::Markdown => "md",
        }
    }

    /// Parse a format name, case-insensitively
    pub fn parse(value: &str) -> Result<Format, String> {
        let wanted = value.trim().to_lowercase();
        Format::ALL.into_iter().find(|format| format.name() == wanted).ok_or_else(|| {
            let names: Vec<&str> = Format::ALL.iter().map(Format::name).collect();
            format!("Unknown format '{}'. Available formats: {}", value, names.join(", "))
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One line per format: name and file extension
pub fn list_formats() -> String {
    Format::ALL.iter().map(|format| format!("{} (.{})\n", format.name(), format.extension())).collect()
}
