//! Parser for catalog JSON documents.
//!
//! Accepted layouts:
//! - `{ "courses": [...], "departments": [...], "careerPaths": [...] }`
//!   (the bundled dataset and the `/courses` API response; the last two keys
//!   are optional)
//! - a bare `[...]` array of courses
//!
//! Each course is decoded on its own. A record that does not fit the
//! `Course` shape is logged and skipped so the rest of the catalog still
//! loads.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Everything a catalog document can carry.
#[derive(Debug, Default)]
pub struct CatalogDocument {
    pub courses: Vec<Course>,
    pub departments: Vec<Department>,
    pub career_paths: Vec<CareerPath>,
    /// Number of course records that were dropped
    pub skipped: usize,
}

/// Parse a catalog document from a JSON string.
pub fn parse_document(json: &str) -> Result<CatalogDocument> {
    let root: Value = serde_json::from_str(json)?;

    let (course_values, departments, career_paths) = match root {
        Value::Array(items) => (items, Vec::new(), Vec::new()),
        Value::Object(mut map) => {
            let courses = match map.remove("courses") {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(CatalogError::Layout(format!(
                        "\"courses\" must be an array, found {}",
                        type_name(&other)
                    )));
                }
                None => {
                    return Err(CatalogError::Layout(
                        "missing \"courses\" key".to_string(),
                    ));
                }
            };
            let departments = parse_optional_list(map.remove("departments"), "departments")?;
            let career_paths = parse_optional_list(map.remove("careerPaths"), "careerPaths")?;
            (courses, departments, career_paths)
        }
        other => {
            return Err(CatalogError::Layout(format!(
                "expected an object or array, found {}",
                type_name(&other)
            )));
        }
    };

    let total = course_values.len();
    let courses = decode_courses(course_values);
    let skipped = total - courses.len();
    debug!("Parsed {} of {} course records", courses.len(), total);

    Ok(CatalogDocument {
        courses,
        departments,
        career_paths,
        skipped,
    })
}

/// Parse only the course list out of a JSON string.
pub fn parse_courses_json(json: &str) -> Result<Vec<Course>> {
    Ok(parse_document(json)?.courses)
}

/// Read and parse a catalog document from disk.
pub fn parse_document_file(path: &Path) -> Result<CatalogDocument> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// Read only the course list from disk.
pub fn parse_courses_file(path: &Path) -> Result<Vec<Course>> {
    Ok(parse_document_file(path)?.courses)
}

/// Decode each value independently, dropping the ones that don't fit.
pub fn decode_courses(values: Vec<Value>) -> Vec<Course> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let id = value
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or("<no id>")
                .to_string();
            match serde_json::from_value::<Course>(value) {
                Ok(course) => Some(course),
                Err(e) => {
                    warn!("Skipping course record {} (id {}): {}", idx, id, e);
                    None
                }
            }
        })
        .collect()
}

fn parse_optional_list<T: serde::de::DeserializeOwned>(
    value: Option<Value>,
    key: &str,
) -> Result<Vec<T>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => serde_json::from_value(v).map_err(|e| CatalogError::InvalidValue {
            field: key.to_string(),
            value: e.to_string(),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
