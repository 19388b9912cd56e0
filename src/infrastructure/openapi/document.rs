//! The loaded OpenAPI document.
//!
//! A [`Document`] is a read-only view over the parsed YAML/JSON tree. It is
//! built once per run and shared by reference with every builder; nothing
//! mutates it after load. Mappings keep the order they were declared in,
//! which is what makes generated output reproducible.

use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;

use serde_yaml::{Mapping, Value};
use tracing::warn;

use super::resolver::{self, Resolution};
use crate::core::error::{Error, Result};

/// A parsed OpenAPI document whose top level is a mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Parse `text`, requiring a mapping at the top level. `origin` is only
    /// used for error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| Error::parse(origin, e.to_string()))?;

        match value {
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(Error::parse(
                origin,
                format!(
                    "OpenAPI specification must be a YAML/JSON document containing an object, got {}",
                    kind_name(&other)
                ),
            )),
        }
    }

    /// Top-level entry by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Resolve an internal `#/a/b/c` pointer against this document
    pub fn resolve(&self, pointer: &str) -> Resolution<'_> {
        resolver::resolve(self, pointer)
    }

    /// A scalar field of the `info` block as text. `version: 2.1` gives `"2.1"`.
    pub fn info_str(&self, field: &str) -> Option<Cow<'_, str>> {
        scalar_text(self.get("info")?.get(field)?)
    }

    /// `info.title`, or `"API"` when absent
    pub fn title(&self) -> Cow<'_, str> {
        self.info_str("title").unwrap_or(Cow::Borrowed("API"))
    }

    /// `(path, path item)` pairs under `paths`, in declaration order
    pub fn paths(&self) -> impl Iterator<Item = (Cow<'_, str>, &Value)> {
        scalar_entries(self.get("paths"), "paths")
    }

    /// `(name, schema)` pairs under `components.schemas`, in declaration order
    pub fn schemas(&self) -> impl Iterator<Item = (Cow<'_, str>, &Value)> {
        scalar_entries(
            self.get("components").and_then(|c| c.get("schemas")),
            "components.schemas",
        )
    }

    /// URL of the first entry under `servers`, if any
    pub fn first_server_url(&self) -> Option<&str> {
        self.get("servers")?
            .as_sequence()?
            .first()?
            .get("url")?
            .as_str()
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, Path::new("<memory>"))
    }
}

/// Text of a string, number or boolean scalar. Anything else has none.
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        _ => None,
    }
}

/// Entries of a mapping keyed by their scalar text. Keys without one are
/// logged and left out.
fn scalar_entries<'a>(
    value: Option<&'a Value>,
    section: &'static str,
) -> impl Iterator<Item = (Cow<'a, str>, &'a Value)> {
    value
        .and_then(Value::as_mapping)
        .into_iter()
        .flat_map(|mapping| mapping.iter())
        .filter_map(move |(key, value)| match scalar_text(key) {
            Some(key) => Some((key, value)),
            None => {
                warn!(
                    section,
                    key_kind = kind_name(key),
                    "Skipping entry whose key is not a scalar"
                );
                None
            }
        })
}

/// Human readable name of a YAML value kind, for diagnostics
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
