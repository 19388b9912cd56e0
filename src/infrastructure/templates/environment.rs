//! Tera template environment.
//!
//! The built-in templates are embedded in the binary at compile time from the
//! `templates/` directory so the generator works right after `cargo install`.
//! A directory on disk can replace them wholesale via `--template-dir`.

use std::io;
use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use tera::Tera;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::RenderContext;

/// Templates bundled with the binary
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Where a [`TemplateEnvironment`] got its templates from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    Directory(PathBuf),
    Memory,
}

/// A loaded set of named templates
#[derive(Debug)]
pub struct TemplateEnvironment {
    tera: Tera,
    source: TemplateSource,
}

impl TemplateEnvironment {
    /// Environment over the templates compiled into the binary
    pub fn embedded() -> Result<Self> {
        let mut templates = Vec::new();
        for name in EmbeddedTemplates::iter() {
            let Some(file) = EmbeddedTemplates::get(&name) else {
                continue;
            };
            let content = String::from_utf8(file.data.into_owned()).map_err(|e| {
                Error::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Embedded template {name} is not UTF-8: {e}"),
                ))
            })?;
            templates.push((name.into_owned(), content));
        }
        debug!(count = templates.len(), "Loaded embedded templates");

        let mut env = Self::from_raw(templates)?;
        env.source = TemplateSource::Embedded;
        Ok(env)
    }

    /// Environment over every file below `dir`, named by relative path
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Template directory not found: {}", dir.display()),
            )));
        }

        let pattern = format!("{}/**/*", dir.display());
        let tera = Tera::new(&pattern)?;
        debug!(dir = %dir.display(), count = tera.get_template_names().count(), "Loaded templates from directory");

        Ok(Self {
            tera,
            source: TemplateSource::Directory(dir.to_path_buf()),
        })
    }

    /// Environment over in-memory `(name, content)` pairs
    pub fn from_raw<I, N, C>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(Self {
            tera,
            source: TemplateSource::Memory,
        })
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render template `name` against `context`
    pub fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        Ok(self.tera.render(name, &context.to_tera_context())?)
    }
}
