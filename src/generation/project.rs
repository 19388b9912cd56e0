//! Project assembly: naming, context and the set of files a generated
//! project consists of.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::context::RenderContext;
use super::resources::{build_resource_definitions, render_resource_definitions};
use super::tools::{build_tool_definitions, render_tool_definitions};
use crate::core::config::ApiSettings;
use crate::core::error::Result;
use crate::core::utils::slugify;
use crate::infrastructure::openapi::Document;
use crate::infrastructure::templates::TemplateEnvironment;

/// Prefix of every generated project identifier
pub const IDENTIFIER_PREFIX: &str = "openapi-mcp";

const MAX_SUFFIX_ATTEMPTS: usize = 32;

/// One file of a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFile {
    /// Template name inside the [`TemplateEnvironment`]
    pub template: &'static str,
    /// Path relative to the project directory
    pub output: &'static str,
    /// Unix mode to apply after writing
    pub permissions: Option<u32>,
}

/// Files written for every project, in write order
pub const PROJECT_FILES: [ProjectFile; 6] = [
    ProjectFile {
        template: "docker/Dockerfile",
        output: "Dockerfile",
        permissions: None,
    },
    ProjectFile {
        template: "docker/docker.sh",
        output: "docker.sh",
        permissions: Some(0o755),
    },
    ProjectFile {
        template: "config/env.sh",
        output: ".env.sh",
        permissions: Some(0o755),
    },
    ProjectFile {
        template: "server/mcp_server.py",
        output: "mcp_server.py",
        permissions: Some(0o755),
    },
    ProjectFile {
        template: "requirements.txt",
        output: "requirements.txt",
        permissions: None,
    },
    ProjectFile {
        template: "pyproject.toml",
        output: "pyproject.toml",
        permissions: None,
    },
];

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project directory
    pub path: PathBuf,
    pub content: String,
    pub permissions: Option<u32>,
}

/// Names derived from the project identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    pub identifier: String,
    pub container_name: String,
    pub image_name: String,
    pub project_name: String,
}

impl ProjectNames {
    pub fn from_identifier(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            container_name: identifier.clone(),
            image_name: identifier.to_lowercase(),
            project_name: identifier.replace('-', "_"),
            identifier,
        }
    }
}

impl fmt::Display for ProjectNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Output of [`ProjectAssembler::assemble`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledProject {
    pub names: ProjectNames,
    /// `<output root>/<identifier>`
    pub directory: PathBuf,
    pub context: RenderContext,
}

/// Source of identifier suffixes
pub type SuffixGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// First eight hex characters of a random v4 UUID
pub fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(8);
    suffix
}

/// Builds the per-run [`RenderContext`] and renders the project files
pub struct ProjectAssembler {
    templates: TemplateEnvironment,
    suffix: SuffixGenerator,
}

impl ProjectAssembler {
    pub fn new(templates: TemplateEnvironment) -> Self {
        Self {
            templates,
            suffix: Box::new(random_suffix),
        }
    }

    /// Replace the random suffix source, e.g. with a deterministic one
    pub fn with_suffix_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.suffix = Box::new(generator);
        self
    }

    /// `openapi-mcp-<slug>-<suffix>`, drawing a fresh suffix while a
    /// directory of that name already exists under `output_root`.
    pub fn derive_identifier(&self, title: &str, output_root: &Path) -> String {
        let slug = slugify(title);
        let mut candidate = format!("{IDENTIFIER_PREFIX}-{slug}-{}", (self.suffix)());

        for _ in 1..MAX_SUFFIX_ATTEMPTS {
            if !output_root.join(&candidate).exists() {
                return candidate;
            }
            debug!(identifier = %candidate, "Project directory exists, drawing a new suffix");
            candidate = format!("{IDENTIFIER_PREFIX}-{slug}-{}", (self.suffix)());
        }

        if output_root.join(&candidate).exists() {
            warn!(
                identifier = %candidate,
                attempts = MAX_SUFFIX_ATTEMPTS,
                "Could not find an unused project identifier; files will be overwritten"
            );
        }
        candidate
    }

    /// Derive names and build the full render context for `document`
    pub fn assemble(
        &self,
        document: &Document,
        settings: &ApiSettings,
        output_root: &Path,
    ) -> AssembledProject {
        let api_name = document.title().into_owned();
        let names = ProjectNames::from_identifier(self.derive_identifier(&api_name, output_root));

        let api_url = if settings.api_url.is_empty() {
            document.first_server_url().unwrap_or_default().to_string()
        } else {
            settings.api_url.clone()
        };

        let tools = build_tool_definitions(document);
        let resources = build_resource_definitions(document);
        info!(
            project = %names,
            tools = tools.len(),
            resources = resources.len(),
            "Assembled project"
        );

        let context = RenderContext {
            mcp_server_name: format!("{api_name} API"),
            api_name,
            api_url,
            auth_type: settings.auth_type.as_str().to_string(),
            api_token: settings.api_token.clone(),
            api_username: settings.api_username.clone(),
            api_password: settings.api_password.clone(),
            container_name: names.container_name.clone(),
            image_name: names.image_name.clone(),
            project_name: names.project_name.clone(),
            tool_definitions: render_tool_definitions(&tools),
            resource_definitions: render_resource_definitions(&resources),
        };

        AssembledProject {
            directory: output_root.join(&names.identifier),
            names,
            context,
        }
    }

    /// Render every entry of [`PROJECT_FILES`]
    pub fn render(&self, context: &RenderContext) -> Result<Vec<Artifact>> {
        PROJECT_FILES
            .iter()
            .map(|file| {
                let content = self.templates.render(file.template, context)?;
                Ok(Artifact {
                    path: PathBuf::from(file.output),
                    content,
                    permissions: file.permissions,
                })
            })
            .collect()
    }
}
