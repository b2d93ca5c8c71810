use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`; relative paths resolve against it.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());

        tokio::fs::read(&full_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::NotFound {
                path: path.to_string(),
            },
            _ => ConvertError::IoError(e),
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());
        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn is_dir(&self, path: &str) -> Result<bool> {
        match tokio::fs::metadata(self.resolve(path)).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ConvertError::NotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(ConvertError::IoError(e)),
        }
    }
}
