//! End-to-end tests for project generation through the library API

use std::path::{Path, PathBuf};

use openapi_mcp_generator::core::{ApiSettings, AuthType, GeneratorConfig};
use openapi_mcp_generator::generation::ProjectAssembler;
use openapi_mcp_generator::infrastructure::templates::TemplateEnvironment;
use openapi_mcp_generator::{Error, GenerateServerUseCase, generate_mcp_server};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn use_case(suffix: &'static str) -> GenerateServerUseCase {
    let templates = TemplateEnvironment::embedded().expect("embedded templates");
    let assembler = ProjectAssembler::new(templates).with_suffix_generator(move || suffix.to_string());
    GenerateServerUseCase::new(assembler)
}

#[tokio::test]
async fn test_generates_full_project_from_yaml() {
    let out = TempDir::new().unwrap();
    let config = GeneratorConfig::new(fixture("openapi.yaml"), out.path());

    let response = use_case("12345678").execute(&config).await.unwrap();
    let dir = &response.project_dir;

    assert_eq!(dir, &out.path().join("openapi-mcp-reference-test-api-12345678"));
    for name in [
        "Dockerfile",
        "docker.sh",
        ".env.sh",
        "mcp_server.py",
        "requirements.txt",
        "pyproject.toml",
    ] {
        assert!(dir.join(name).is_file(), "missing {name}");
    }

    let server = std::fs::read_to_string(dir.join("mcp_server.py")).unwrap();
    assert!(server.contains("\"Reference Test API API\""));
    assert!(server.contains("\"https://reference.example.com/api\""));
    assert!(server.contains(
        "async def listItems(limit: int, ratio: float, archived: bool, ctx: Context) -> str:"
    ));
    assert!(server.contains("async def createItem(ctx: Context) -> str:"));
    assert!(server.contains("async def getItem(id: str, ctx: Context) -> str:"));
    assert!(server.contains("@mcp.tool(description=\"GET /items/{id}\")"));
    assert!(server.contains("@mcp.tool(description=\"\")"));
    assert!(!server.contains("headItem"));
    assert!(!server.contains("tenant"));

    let tools_at = server.find("async def listItems").unwrap();
    let resources_at = server.find("@mcp.resource(\"api://info\")").unwrap();
    assert!(tools_at < resources_at);
    assert!(server.contains("@mcp.resource(\"schema://Item\")"));
    assert!(server.contains("@mcp.resource(\"schema://Error\")"));
    assert!(server.contains(
        "Description: An API used to exercise the generator. It has \\\"quoted\\\" words and more than one line. "
    ));

    let pyproject = std::fs::read_to_string(dir.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"openapi_mcp_reference_test_api_12345678\""));

    let docker = std::fs::read_to_string(dir.join("docker.sh")).unwrap();
    assert!(docker.contains("IMAGE_NAME=\"openapi-mcp-reference-test-api-12345678\""));
}

#[tokio::test]
async fn test_generates_from_json() {
    let out = TempDir::new().unwrap();
    let config = GeneratorConfig::new(fixture("openapi.json"), out.path());

    let response = use_case("aaaabbbb").execute(&config).await.unwrap();
    assert_eq!(response.names.identifier, "openapi-mcp-json-api-aaaabbbb");

    let server = std::fs::read_to_string(response.project_dir.join("mcp_server.py")).unwrap();
    assert!(server.contains("async def ping(ctx: Context) -> str:"));
    assert!(server.contains("@mcp.resource(\"api://info\")"));
    assert!(!server.contains("schema://"));
}

#[tokio::test]
async fn test_settings_flow_into_env_file() {
    let out = TempDir::new().unwrap();
    let mut config = GeneratorConfig::new(fixture("openapi.yaml"), out.path());
    config.api = ApiSettings {
        api_url: "http://localhost:9000".to_string(),
        auth_type: AuthType::Basic,
        api_token: String::new(),
        api_username: "alice".to_string(),
        api_password: "hunter2".to_string(),
    };

    let response = use_case("ffffffff").execute(&config).await.unwrap();
    let env = std::fs::read_to_string(response.project_dir.join(".env.sh")).unwrap();
    assert!(env.contains("export API_URL=\"http://localhost:9000\""));
    assert!(env.contains("export API_AUTH_TYPE=\"basic\""));
    assert!(env.contains("export API_USERNAME=\"alice\""));
    assert!(env.contains("export API_PASSWORD=\"hunter2\""));
}

#[cfg(unix)]
#[tokio::test]
async fn test_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let out = TempDir::new().unwrap();
    let config = GeneratorConfig::new(fixture("openapi.yaml"), out.path());
    let dir = generate_mcp_server(&config).await.unwrap();

    for name in ["docker.sh", ".env.sh", "mcp_server.py"] {
        let mode = std::fs::metadata(dir.join(name)).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "{name} is not executable");
    }
}

#[tokio::test]
async fn test_custom_template_dir() {
    let templates = TempDir::new().unwrap();
    for (name, content) in [
        ("docker/Dockerfile", "FROM custom"),
        ("docker/docker.sh", "echo {{ image_name }}"),
        ("config/env.sh", "API_URL={{ api_url }}"),
        ("server/mcp_server.py", "# {{ mcp_server_name }}\n{{ tool_definitions }}"),
        ("requirements.txt", "mcp"),
        ("pyproject.toml", "name = \"{{ project_name }}\""),
    ] {
        let path = templates.path().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    let out = TempDir::new().unwrap();
    let mut config = GeneratorConfig::new(fixture("openapi.yaml"), out.path());
    config.template_dir = Some(templates.path().to_path_buf());

    let dir = generate_mcp_server(&config).await.unwrap();
    assert_eq!(std::fs::read_to_string(dir.join("Dockerfile")).unwrap(), "FROM custom");
    let server = std::fs::read_to_string(dir.join("mcp_server.py")).unwrap();
    assert!(server.starts_with("# Reference Test API API\n"));
    assert!(server.contains("async def listItems("));
}

#[tokio::test]
async fn test_invalid_document_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let spec = dir.path().join("list.yaml");
    std::fs::write(&spec, "- just\n- a list\n").unwrap();

    let config = GeneratorConfig::new(&spec, dir.path().join("out"));
    let result = generate_mcp_server(&config).await;
    assert!(matches!(result, Err(Error::Parse { .. })));
    assert!(!dir.path().join("out").exists());
}
