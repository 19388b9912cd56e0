//! The flat template context handed to the renderer

/// The exact set of keys a [`RenderContext`] carries
pub const CONTEXT_KEYS: [&str; 12] = [
    "api_name",
    "api_url",
    "auth_type",
    "api_token",
    "api_username",
    "api_password",
    "container_name",
    "image_name",
    "project_name",
    "mcp_server_name",
    "tool_definitions",
    "resource_definitions",
];

/// String-only context assembled once per run; the last thing the core produces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub api_name: String,
    pub api_url: String,
    pub auth_type: String,
    pub api_token: String,
    pub api_username: String,
    pub api_password: String,
    pub container_name: String,
    pub image_name: String,
    pub project_name: String,
    pub mcp_server_name: String,
    /// Concatenated tool blocks
    pub tool_definitions: String,
    /// Concatenated resource blocks
    pub resource_definitions: String,
}

impl RenderContext {
    /// Look a value up by its context key
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "api_name" => &self.api_name,
            "api_url" => &self.api_url,
            "auth_type" => &self.auth_type,
            "api_token" => &self.api_token,
            "api_username" => &self.api_username,
            "api_password" => &self.api_password,
            "container_name" => &self.container_name,
            "image_name" => &self.image_name,
            "project_name" => &self.project_name,
            "mcp_server_name" => &self.mcp_server_name,
            "tool_definitions" => &self.tool_definitions,
            "resource_definitions" => &self.resource_definitions,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// `(key, value)` pairs in [`CONTEXT_KEYS`] order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        CONTEXT_KEYS
            .iter()
            .filter_map(move |key| self.get(key).map(|value| (*key, value)))
    }

    /// Convert into a Tera context
    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in self.iter() {
            context.insert(key, value);
        }
        context
    }
}
