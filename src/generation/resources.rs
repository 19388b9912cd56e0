//! Resource definitions: static, parameterless readables exposed by the
//! generated server. There is always one for the API info block, then one per
//! schema under `components.schemas`.

use std::fmt;

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::core::utils::{
    escape_fstring_braces, escape_python_literal, sanitize_description, to_python_identifier,
};
use crate::infrastructure::openapi::Document;

pub const API_INFO_URI: &str = "api://info";

const DEFAULT_TITLE: &str = "API";
const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_DESCRIPTION: &str = "API description";

/// What a resource returns when read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceBody {
    /// Title, version and sanitized description of the API
    ApiInfo {
        title: String,
        version: String,
        description: String,
    },
    /// A schema dumped as YAML
    Schema(String),
}

/// One generated resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    pub uri: String,
    pub title: String,
    /// Name of the generated Python function
    pub function_name: String,
    pub body: ResourceBody,
}

impl ResourceDefinition {
    /// Resource for the `info` block, with fallbacks for missing fields
    pub fn api_info(document: &Document) -> Self {
        let title = document.info_str("title");
        let version = document.info_str("version");
        let description = document.info_str("description");

        Self {
            uri: API_INFO_URI.to_string(),
            title: "Get API information".to_string(),
            function_name: "get_api_info".to_string(),
            body: ResourceBody::ApiInfo {
                title: title.as_deref().unwrap_or(DEFAULT_TITLE).to_string(),
                version: version.as_deref().unwrap_or(DEFAULT_VERSION).to_string(),
                description: sanitize_description(
                    description.as_deref().unwrap_or(DEFAULT_DESCRIPTION),
                ),
            },
        }
    }

    /// Resource for one named schema
    pub fn schema(name: &str, schema: &Value) -> Result<Self, serde_yaml::Error> {
        Ok(Self {
            uri: format!("schema://{name}"),
            title: format!("Get the {name} schema definition"),
            function_name: format!("get_{}_schema", to_python_identifier(name)),
            body: ResourceBody::Schema(serde_yaml::to_string(schema)?),
        })
    }
}

impl fmt::Display for ResourceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            ResourceBody::ApiInfo {
                title,
                version,
                description,
            } => write!(
                f,
                r#"
@mcp.resource("{uri}")
def {function_name}() -> str:
    """
    {doc}
    """
    return f"""
    Title: {title}
    Version: {version}
    Description: {description}
    """
"#,
                uri = self.uri,
                function_name = self.function_name,
                doc = escape_python_literal(&self.title),
                title = escape_fstring_braces(&escape_python_literal(title)),
                version = escape_fstring_braces(&escape_python_literal(version)),
                description = escape_fstring_braces(description),
            ),
            ResourceBody::Schema(dump) => write!(
                f,
                r#"
@mcp.resource("{uri}")
def {function_name}() -> str:
    """
    {doc}
    """
    return """
    {dump}
    """
"#,
                uri = self.uri,
                function_name = self.function_name,
                doc = escape_python_literal(&self.title),
                dump = escape_python_literal(dump),
            ),
        }
    }
}

/// The API info resource followed by one resource per schema, in document order
pub fn build_resource_definitions(document: &Document) -> Vec<ResourceDefinition> {
    let mut resources = vec![ResourceDefinition::api_info(document)];

    for (name, schema) in document.schemas() {
        match ResourceDefinition::schema(&name, schema) {
            Ok(resource) => {
                debug!(uri = %resource.uri, "Built schema resource");
                resources.push(resource);
            }
            Err(e) => warn!(schema = %name, error = %e, "Skipping schema that cannot be serialized"),
        }
    }

    resources
}

/// Concatenate rendered resource blocks
pub fn render_resource_definitions(resources: &[ResourceDefinition]) -> String {
    resources
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
