/// Artifact decoding
///
/// Reads TableTest YAML artifacts into generic documents. YAML mappings with
/// non-string keys are kept by rendering the key as text, and tags such as
/// `!!set` are unwrapped to their underlying value.
use crate::error::{ReportError, Result};
use crate::types::{Document, Source};
use log::debug;
use serde_json::Value as Json;
use serde_yaml_ng::Value as Yaml;
use std::fs;
use std::path::{Path, PathBuf};

/// Load every file in `files` (relative to `dir`) as a [`Source`].
pub fn load_sources(dir: &Path, files: &[PathBuf]) -> Result<Vec<Source>> {
    files
        .iter()
        .map(|file| {
            let document = load_document(&dir.join(file))?;
            Ok(Source::new(file.clone(), document))
        })
        .collect()
}

/// Read and decode a single artifact file.
pub fn load_document(path: &Path) -> Result<Document> {
    debug!("Loading {:?}", path);
    let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_document(&content).map_err(|message| ReportError::Decode { path: path.to_path_buf(), message })
}

/// Decode YAML text into a document. Empty input is an empty document.
pub fn parse_document(content: &str) -> std::result::Result<Document, String> {
    if content.trim().is_empty() {
        return Ok(Document::new());
    }

    let value: Yaml = serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
    match yaml_to_json(value) {
        Json::Object(map) => Ok(map),
        Json::Null => Ok(Document::new()),
        other => Err(format!("expected a mapping at the top level, found {}", json_kind(&other))),
    }
}

fn yaml_to_json(value: Yaml) -> Json {
    match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                n.as_f64().and_then(serde_json::Number::from_f64).map(Json::Number).unwrap_or(Json::Null)
            }
        }
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(seq) => Json::Array(seq.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Json::Object(map.into_iter().map(|(k, v)| (yaml_key(k), yaml_to_json(v))).collect()),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: Yaml) -> String {
    match key {
        Yaml::String(s) => s,
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        other => serde_json::to_string(&yaml_to_json(other)).unwrap_or_default(),
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "a sequence",
        Json::Object(_) => "a mapping",
    }
}
