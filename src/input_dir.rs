/// Input directory resolution
///
/// When no input directory is configured, the reporter looks where JUnit
/// writes its reporting output: a directory handed over by the build tool,
/// then `junit.platform.reporting.output.dir` from the project's
/// `junit-platform.properties`, then the conventional Maven and Gradle
/// locations.
use crate::paths;
use crate::scanner;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const PROPERTIES_PATH: &str = "src/test/resources/junit-platform.properties";
const OUTPUT_DIR_KEY: &str = "junit.platform.reporting.output.dir";
const UNIQUE_NUMBER_PLACEHOLDER: &str = "{uniqueNumber}";
const DEFAULT_CANDIDATES: [&str; 2] = ["target/junit-jupiter", "build/junit-jupiter"];

/// Where the resolved input directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Configured,
    JunitProperty,
    Fallback,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: Option<PathBuf>,
    pub source: ResolutionSource,
    /// Every location considered, in search order
    pub candidates: Vec<PathBuf>,
}

impl Resolution {
    /// The resolved directory, if it exists
    pub fn existing_dir(&self) -> Option<&Path> {
        self.path.as_deref().filter(|path| path.exists())
    }

    /// Error text for a missing input directory, listing the searched locations
    pub fn missing_input_message(&self) -> String {
        let mut message = match &self.path {
            Some(path) => format!("Input directory does not exist: {}", absolute(path).display()),
            None => "Input directory does not exist".to_string(),
        };
        if !self.candidates.is_empty() {
            message.push_str("\nSearched locations:");
            for candidate in &self.candidates {
                message.push_str(&format!("\n  - {}", absolute(candidate).display()));
            }
        }
        message
    }
}

/// Resolve the input directory.
///
/// A configured directory is used as is. Otherwise the first JUnit candidate
/// holding artifacts wins, then the first fallback holding artifacts, then
/// the first candidate that exists at all. The fallbacks are
/// `target/junit-jupiter` and `build/junit-jupiter` under `base_dir`.
pub fn resolve(configured: Option<&Path>, base_dir: &Path, junit_output_dir: Option<&Path>) -> Resolution {
    if let Some(configured) = configured {
        let path = normalize(base_dir, configured);
        debug!("Using configured input directory {:?}", path);
        return Resolution { path: Some(path.clone()), source: ResolutionSource::Configured, candidates: vec![path] };
    }

    let junit_dirs = distinct(
        junit_output_dir
            .map(Path::to_path_buf)
            .into_iter()
            .chain(junit_properties_dir(base_dir))
            .map(|dir| normalize(base_dir, &dir)),
    );
    let fallbacks = distinct(DEFAULT_CANDIDATES.iter().map(|candidate| normalize(base_dir, Path::new(candidate))));
    let candidates = distinct(junit_dirs.iter().chain(fallbacks.iter()).cloned());

    if let Some(path) = junit_dirs.iter().find(|dir| has_outputs(dir)) {
        debug!("Using JUnit output directory {:?}", path);
        return Resolution { path: Some(path.clone()), source: ResolutionSource::JunitProperty, candidates };
    }

    if let Some(path) = fallbacks.iter().find(|dir| has_outputs(dir)) {
        debug!("Using fallback input directory {:?}", path);
        return Resolution { path: Some(path.clone()), source: ResolutionSource::Fallback, candidates };
    }

    match candidates.iter().find(|candidate| candidate.exists()).cloned() {
        Some(path) => {
            let source =
                if junit_dirs.contains(&path) { ResolutionSource::JunitProperty } else { ResolutionSource::Fallback };
            Resolution { path: Some(path), source, candidates }
        }
        None => Resolution { path: None, source: ResolutionSource::None, candidates },
    }
}

/// Reporting output directory configured in `junit-platform.properties`.
///
/// A path segment holding `{uniqueNumber}` is dropped together with
/// everything after it; a bare placeholder resolves to `base_dir`.
pub fn junit_properties_dir(base_dir: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(base_dir.join(PROPERTIES_PATH)).ok()?;
    let value = property_value(&content, OUTPUT_DIR_KEY)?;
    let value = strip_placeholders(&value);
    let path = Path::new(&value);
    Some(if path.is_absolute() { path.to_path_buf() } else { base_dir.join(path) })
}

/// Look up `key` in Java properties text. Blank values count as absent.
fn property_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let split_at = line.find(['=', ':']).unwrap_or(line.len());
            let (name, rest) = line.split_at(split_at);
            let value = rest.get(1..).unwrap_or("");
            (name.trim() == key).then(|| value.trim().to_string())
        })
        .last()
        .filter(|value| !value.is_empty())
}

fn strip_placeholders(value: &str) -> String {
    if !value.contains(UNIQUE_NUMBER_PLACEHOLDER) {
        return value.to_string();
    }
    let prefix: Vec<&str> =
        value.split('/').take_while(|segment| !segment.contains(UNIQUE_NUMBER_PLACEHOLDER)).collect();
    let prefix = prefix.join("/");
    if prefix.is_empty() { ".".to_string() } else { prefix }
}

fn normalize(base_dir: &Path, input: &Path) -> PathBuf {
    if input.is_absolute() { paths::normalize(input) } else { paths::normalize(&base_dir.join(input)) }
}

fn distinct(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::new();
    for path in paths {
        if !unique.contains(&path) {
            unique.push(path);
        }
    }
    unique
}

fn has_outputs(dir: &Path) -> bool {
    scanner::has_artifact_files(dir)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "input_dir_test.rs"]
mod input_dir_test;
