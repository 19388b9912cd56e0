//! Operation parameter mapping.
//!
//! Turns one entry of an operation's `parameters` list into a name and a
//! Python type. The type table is fixed: generated servers are type-checked
//! downstream against exactly these names.

use std::fmt;

use serde_yaml::Value;
use tracing::warn;

use crate::infrastructure::openapi::{Document, Resolution, scalar_text};

/// Argument kinds a tool parameter can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamKind {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
}

impl ParamKind {
    /// Kind for a declared schema `type`. Anything unrecognised is a string.
    pub fn from_schema_type(schema_type: Option<&str>) -> Self {
        match schema_type {
            Some("integer") => ParamKind::Integer,
            Some("number") => ParamKind::Number,
            Some("boolean") => ParamKind::Boolean,
            _ => ParamKind::String,
        }
    }

    /// Python annotation used in generated signatures
    pub fn python_type(&self) -> &'static str {
        match self {
            ParamKind::String => "str",
            ParamKind::Integer => "int",
            ParamKind::Number => "float",
            ParamKind::Boolean => "bool",
        }
    }
}

/// A single named, typed tool argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolParameter {
    pub name: String,
    pub kind: ParamKind,
}

impl fmt::Display for ToolParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.kind.python_type())
    }
}

/// Outcome of mapping one raw parameter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterMapping {
    Mapped(ToolParameter),
    Skipped(String),
}

/// Map a raw parameter entry, following a `$ref` when present
pub fn map_parameter(document: &Document, raw: &Value) -> ParameterMapping {
    let param = match raw.get("$ref") {
        Some(Value::String(pointer)) => match document.resolve(pointer) {
            Resolution::Resolved(value) => value,
            Resolution::Unresolved(reason) => {
                warn!(reference = %pointer, %reason, "Could not resolve reference");
                return ParameterMapping::Skipped(format!(
                    "unresolved reference {pointer}: {reason}"
                ));
            }
        },
        Some(_) => return ParameterMapping::Skipped("'$ref' is not a string".to_string()),
        None => raw,
    };

    let Some(name) = param.get("name").and_then(scalar_text) else {
        return ParameterMapping::Skipped("parameter has no name".to_string());
    };

    ParameterMapping::Mapped(ToolParameter {
        name: name.into_owned(),
        kind: parameter_kind(param),
    })
}

/// Map every entry of an operation's `parameters` list in declaration order,
/// dropping (and logging) the ones that cannot be mapped.
pub fn map_parameters(document: &Document, operation: &Value) -> Vec<ToolParameter> {
    let Some(entries) = operation.get("parameters").and_then(Value::as_sequence) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|raw| match map_parameter(document, raw) {
            ParameterMapping::Mapped(param) => Some(param),
            ParameterMapping::Skipped(reason) => {
                warn!(
                    %reason,
                    parameter = ?raw,
                    "Skipping parameter due to missing name or unresolved reference"
                );
                None
            }
        })
        .collect()
}

fn parameter_kind(param: &Value) -> ParamKind {
    match param.get("schema") {
        Some(schema) => ParamKind::from_schema_type(schema.get("type").and_then(Value::as_str)),
        None => ParamKind::String,
    }
}
