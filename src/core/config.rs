//! Run configuration for MCP server generation

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the generated server authenticates against the upstream API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `Authorization: <token>`
    Token,
    /// HTTP basic auth with username and password
    Basic,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Bearer => "bearer",
            AuthType::Token => "token",
            AuthType::Basic => "basic",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials and endpoint settings baked into the generated project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL of the upstream API. Empty means "use the first server in the document".
    pub api_url: String,
    pub auth_type: AuthType,
    pub api_token: String,
    pub api_username: String,
    pub api_password: String,
}

/// Everything one generation run needs
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path to the OpenAPI document
    pub openapi_file: PathBuf,
    /// Directory under which the project directory is created
    pub output_dir: PathBuf,
    pub api: ApiSettings,
    /// Directory holding custom templates; `None` uses the built-in ones
    pub template_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new<P: Into<PathBuf>, O: Into<PathBuf>>(openapi_file: P, output_dir: O) -> Self {
        Self {
            openapi_file: openapi_file.into(),
            output_dir: output_dir.into(),
            api: ApiSettings::default(),
            template_dir: None,
        }
    }
}
