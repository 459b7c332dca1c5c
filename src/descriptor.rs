/// Class descriptor parsing
///
/// A class descriptor is an artifact that names a test class and lists the
/// table artifacts written for it. Most artifacts are plain table files, so a
/// document that does not look like a descriptor is skipped, not reported.
use crate::types::{ClassDescriptor, Source, TableReference};
use serde_json::{Map, Value};

const CLASS_NAME_KEY: &str = "className";
const SLUG_KEY: &str = "slug";
const TABLE_TESTS_KEY: &str = "tableTests";
const PATH_KEY: &str = "path";
const METHOD_NAME_KEY: &str = "methodName";

/// Interpret `source` as a class descriptor.
///
/// Returns `None` if the document is empty, `className` or `slug` is missing or
/// blank, or `tableTests` is not a list.
pub fn parse_class_descriptor(source: &Source) -> Option<ClassDescriptor> {
    let document = &source.document;
    if document.is_empty() {
        return None;
    }

    let class_name = string_value(document, CLASS_NAME_KEY)?;
    let slug = string_value(document, SLUG_KEY)?;
    let entries = document.get(TABLE_TESTS_KEY)?.as_array()?;

    Some(ClassDescriptor {
        source_path: source.path.clone(),
        document: document.clone(),
        class_name,
        slug,
        table_refs: entries.iter().filter_map(Value::as_object).filter_map(parse_table_reference).collect(),
    })
}

/// Parse one `tableTests` entry, dropping it if `path` is missing or blank.
fn parse_table_reference(entry: &Map<String, Value>) -> Option<TableReference> {
    Some(TableReference {
        path: string_value(entry, PATH_KEY)?,
        method_name: string_value(entry, METHOD_NAME_KEY),
        slug: string_value(entry, SLUG_KEY),
    })
}

fn string_value(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).filter(|s| !s.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;
