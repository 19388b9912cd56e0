//! Specification loaders.
//!
//! [`YamlSpecLoader`] handles YAML and JSON documents. [`TypeScriptSpecLoader`]
//! exists so `.ts` inputs get a clear "not supported" error instead of being
//! fed to the YAML parser.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::document::Document;
use crate::core::error::{Error, Result};

/// Loads an OpenAPI document from a file
pub trait SpecLoader {
    /// Load and validate the document at `path`
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Loads YAML or JSON specifications
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSpecLoader;

impl YamlSpecLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SpecLoader for YamlSpecLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        ensure_exists(path)?;

        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        debug!(path = %path.display(), bytes = text.len(), "Parsing OpenAPI specification");
        Document::parse(&text, path)
    }
}

/// Placeholder for specifications embedded in TypeScript sources
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptSpecLoader;

impl TypeScriptSpecLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SpecLoader for TypeScriptSpecLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        ensure_exists(path)?;
        Err(Error::not_supported(format!(
            "TypeScript OpenAPI parsing is not implemented ({})",
            path.display()
        )))
    }
}

/// Pick the loader for `path` by extension: `.ts` gets the TypeScript
/// loader, everything else is treated as YAML/JSON.
pub fn loader_for(path: &Path) -> Box<dyn SpecLoader> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ts") => Box::new(TypeScriptSpecLoader::new()),
        _ => Box::new(YamlSpecLoader::new()),
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::NotFound {
            path: path.to_path_buf(),
        })
    }
}
