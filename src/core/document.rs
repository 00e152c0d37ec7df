//! Typed tree for translation origin files.
//!
//! Group files and JSON catalogs are parsed into an [`OriginDocument`] and flattened
//! into dotted keys. Only string leaves survive flattening.

use std::{fs, io, path::Path};

use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OriginDocument {
    /// Object node; children keep file order.
    Branch(Vec<(String, OriginDocument)>),
    /// String leaf.
    Text(String),
    /// Anything else (numbers, booleans, null, plural arrays). Dropped when flattening.
    #[default]
    Other,
}

impl From<Value> for OriginDocument {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => OriginDocument::Branch(
                map.into_iter()
                    .map(|(key, val)| (key, OriginDocument::from(val)))
                    .collect(),
            ),
            Value::String(s) => OriginDocument::Text(s),
            _ => OriginDocument::Other,
        }
    }
}

impl OriginDocument {
    /// Read and parse an origin file.
    ///
    /// Returns `Ok(None)` when the file does not exist. The root must be a JSON object.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::NotReadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let value: Value =
            serde_json::from_str(&content).map_err(|e| Error::malformed_catalog(path, e))?;
        if !value.is_object() {
            return Err(Error::malformed_catalog(path, "root must be a JSON object"));
        }
        Ok(Some(OriginDocument::from(value)))
    }

    /// Flatten into `(dotted key, text)` pairs in document order.
    ///
    /// With a prefix, every key becomes `"<prefix>.<subkey>"`.
    pub fn flatten(&self, prefix: Option<&str>) -> Vec<(String, String)> {
        let mut result = Vec::new();
        flatten_into(self, prefix.unwrap_or_default().to_string(), &mut result);
        result
    }

    pub fn is_empty(&self) -> bool {
        match self {
            OriginDocument::Branch(children) => children.is_empty(),
            OriginDocument::Text(_) => false,
            OriginDocument::Other => true,
        }
    }
}

fn flatten_into(node: &OriginDocument, prefix: String, result: &mut Vec<(String, String)>) {
    match node {
        OriginDocument::Branch(children) => {
            for (key, child) in children {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, new_prefix, result);
            }
        }
        OriginDocument::Text(text) => {
            // A bare string at the root has no key to live under.
            if !prefix.is_empty() {
                result.push((prefix, text.clone()));
            }
        }
        OriginDocument::Other => {}
    }
}
