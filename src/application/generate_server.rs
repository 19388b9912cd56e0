//! Use case for generating an MCP server project

use std::path::PathBuf;

use tracing::info;

use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::generation::{ProjectAssembler, ProjectNames};
use crate::infrastructure::openapi::loader_for;
use crate::infrastructure::output::FileSystemOutputService;
use crate::infrastructure::templates::TemplateEnvironment;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerateServerResponse {
    pub names: ProjectNames,
    /// Directory the project was written to
    pub project_dir: PathBuf,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Use case for generating a server project from one document
pub struct GenerateServerUseCase {
    assembler: ProjectAssembler,
}

impl GenerateServerUseCase {
    pub fn new(assembler: ProjectAssembler) -> Self {
        Self { assembler }
    }

    /// Build the use case with the templates selected by `config`
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let templates = match &config.template_dir {
            Some(dir) => TemplateEnvironment::from_dir(dir)?,
            None => TemplateEnvironment::embedded()?,
        };
        Ok(Self::new(ProjectAssembler::new(templates)))
    }

    pub async fn execute(&self, config: &GeneratorConfig) -> Result<GenerateServerResponse> {
        // 1. Load the document
        let document = loader_for(&config.openapi_file).load(&config.openapi_file)?;
        info!(
            path = %config.openapi_file.display(),
            title = %document.title(),
            "Loaded OpenAPI specification"
        );

        // 2. Derive names and build the context
        let project = self
            .assembler
            .assemble(&document, &config.api, &config.output_dir);

        // 3. Render every project file before touching the filesystem
        let artifacts = self.assembler.render(&project.context)?;

        // 4. Write
        let output = FileSystemOutputService::new(&project.directory);
        let files = output.write_artifacts(&artifacts).await?;

        info!(
            project_dir = %project.directory.display(),
            files = files.len(),
            "Generated MCP server project"
        );

        Ok(GenerateServerResponse {
            names: project.names,
            project_dir: project.directory,
            files,
        })
    }
}

/// Generate a project for `config` and return its directory
pub async fn generate_mcp_server(config: &GeneratorConfig) -> Result<PathBuf> {
    let response = GenerateServerUseCase::from_config(config)?
        .execute(config)
        .await?;
    Ok(response.project_dir)
}
