//! Filesystem-based output service implementation

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::Artifact;

/// Writes artifacts below a project directory
#[derive(Debug, Clone)]
pub struct FileSystemOutputService {
    root: PathBuf,
}

impl FileSystemOutputService {
    /// Service writing into `root`, which is created on first write
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Write every artifact, returning the absolute paths written in order
    pub async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
        self.ensure_directory(&self.root).await?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.root.join(&artifact.path);

            if let Some(parent) = path.parent() {
                self.ensure_directory(parent).await?;
            }

            let mut file = fs::File::create(&path).await.map_err(|e| {
                Error::output(format!("Failed to create file {}: {}", path.display(), e))
            })?;

            file.write_all(artifact.content.as_bytes())
                .await
                .map_err(|e| {
                    Error::output(format!("Failed to write file {}: {}", path.display(), e))
                })?;

            file.flush().await.map_err(|e| {
                Error::output(format!("Failed to flush file {}: {}", path.display(), e))
            })?;

            #[cfg(unix)]
            if let Some(mode) = artifact.permissions {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&path, std::fs::Permissions::from_mode(mode))
                    .await
                    .map_err(|e| {
                        Error::output(format!(
                            "Failed to set permissions on {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
            }

            debug!(path = %path.display(), bytes = artifact.content.len(), "Wrote file");
            written.push(path);
        }

        Ok(written)
    }

    pub async fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await.map_err(|e| {
            Error::output(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact(path: &str, content: &str, permissions: Option<u32>) -> Artifact {
        Artifact {
            path: PathBuf::from(path),
            content: content.to_string(),
            permissions,
        }
    }

    #[tokio::test]
    async fn test_write_artifacts_creates_project_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("openapi-mcp-test-12345678");
        let output = FileSystemOutputService::new(&root);

        let written = output
            .write_artifacts(&[
                artifact("Dockerfile", "FROM python:3.12-slim\n", None),
                artifact("requirements.txt", "httpx\n", None),
            ])
            .await
            .expect("write failed");

        assert_eq!(written, vec![root.join("Dockerfile"), root.join("requirements.txt")]);
        let content = std::fs::read_to_string(root.join("Dockerfile")).unwrap();
        assert_eq!(content, "FROM python:3.12-slim\n");
    }

    #[tokio::test]
    async fn test_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = FileSystemOutputService::new(temp_dir.path());

        let nested_path = temp_dir.path().join("deeply/nested/directory");
        output.ensure_directory(&nested_path).await.unwrap();

        assert!(nested_path.is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_artifacts_with_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = FileSystemOutputService::new(temp_dir.path());

        output
            .write_artifacts(&[
                artifact("docker.sh", "#!/bin/bash\necho 'Hello'", Some(0o755)),
                artifact(".env.sh", "export API_URL=\"\"", Some(0o755)),
            ])
            .await
            .unwrap();

        for name in ["docker.sh", ".env.sh"] {
            let mode = std::fs::metadata(temp_dir.path().join(name))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o755, "{name}");
        }
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let output = FileSystemOutputService::new(&blocker);
        let result = output
            .write_artifacts(&[artifact("Dockerfile", "FROM x", None)])
            .await;
        assert!(matches!(result, Err(Error::Output(_))));
    }
}
