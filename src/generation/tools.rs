//! Tool definitions: one generated MCP tool per eligible API operation.
//!
//! An operation is eligible when its method is one of [`HttpMethod::all`]
//! and it carries an `operationId`. Everything else is filtered out without
//! a warning. Repeated ids are kept as-is and only flagged in the log.

use std::collections::HashSet;
use std::fmt;

use serde_yaml::Value;
use tracing::{debug, warn};

use super::parameters::{ToolParameter, map_parameters};
use crate::core::utils::sanitize_description;
use crate::infrastructure::openapi::{Document, scalar_text};

/// Trailing parameter every generated tool receives
pub const CONTEXT_PARAMETER: &str = "ctx: Context";

/// HTTP methods that become tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Get all HTTP methods as an array
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
        ]
    }

    /// Method for a path-item key. Keys are matched case-sensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.as_str() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to emit one tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    /// The `operationId`, used verbatim as the Python function name
    pub id: String,
    /// Sanitized description
    pub description: String,
    pub method: HttpMethod,
    pub path: String,
    /// Declared parameters in document order, without the context parameter
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    /// The full argument list, context parameter last
    pub fn signature(&self) -> String {
        self.parameters
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(CONTEXT_PARAMETER.to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
@mcp.tool(description="{description}")
async def {id}({signature}) -> str:
    """
    {description}
    """
    async with await get_http_client() as client:
        try:
            # Build the URL with path parameters
            url = "{path}"

            # Extract query parameters
            query_params = {{}}
            # ... build query params from function args

            # Make the request
            response = await client.{method}(
                url,
                params=query_params,
                # Add other parameters as needed
            )

            # Check if the request was successful
            response.raise_for_status()

            # Return the response
            return str(response.text)

        except httpx.HTTPStatusError as e:
            return f"API Error: {{e.response.status_code}} - {{e.response.text}}"
        except Exception as e:
            return f"Error: {{str(e)}}"
"#,
            description = self.description,
            id = self.id,
            signature = self.signature(),
            path = self.path,
            method = self.method,
        )
    }
}

/// Build the tool definition for one `(path, method)` pair, or `None` when
/// the operation has no usable `operationId`.
pub fn build_tool_definition(
    document: &Document,
    path: &str,
    method: HttpMethod,
    operation: &Value,
) -> Option<ToolDefinition> {
    let id = operation
        .get("operationId")
        .and_then(scalar_text)
        .filter(|id| !id.is_empty())?;

    let description = match operation.get("description") {
        Some(Value::String(text)) => sanitize_description(text),
        Some(_) => String::new(),
        None => sanitize_description(&format!("{} {path}", method.as_str().to_uppercase())),
    };

    Some(ToolDefinition {
        id: id.to_string(),
        description,
        method,
        path: path.to_string(),
        parameters: map_parameters(document, operation),
    })
}

/// All tool definitions of `document`, in path then method declaration order
pub fn build_tool_definitions(document: &Document) -> Vec<ToolDefinition> {
    let mut tools = Vec::new();
    let mut seen = HashSet::new();

    for (path, path_item) in document.paths() {
        let Some(path_item) = path_item.as_mapping() else {
            continue;
        };

        for (key, operation) in path_item {
            let Some(method) = key.as_str().and_then(HttpMethod::from_key) else {
                continue;
            };
            let Some(tool) = build_tool_definition(document, &path, method, operation) else {
                debug!(%path, %method, "Skipping operation without operationId");
                continue;
            };

            if !seen.insert(tool.id.clone()) {
                warn!(
                    operation_id = %tool.id,
                    %path,
                    %method,
                    "Duplicate operationId; generated tools will share a name"
                );
            }
            debug!(operation_id = %tool.id, %path, %method, "Built tool definition");
            tools.push(tool);
        }
    }

    tools
}

/// Concatenate rendered tool blocks
pub fn render_tool_definitions(tools: &[ToolDefinition]) -> String {
    tools
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
