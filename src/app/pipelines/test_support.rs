use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{ConvertError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    dirs: Arc<Mutex<HashSet<String>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_file(self, path: &str, data: &[u8]) -> Self {
        self.files
            .lock()
            .await
            .insert(path.to_string(), data.to_vec());
        self
    }

    pub async fn with_dir(self, path: &str) -> Self {
        self.dirs.lock().await.insert(path.to_string());
        self
    }

    pub async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().await.get(path).cloned()
    }
}

impl Storage for MockStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| ConvertError::NotFound {
            path: path.to_string(),
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn is_dir(&self, path: &str) -> Result<bool> {
        if self.dirs.lock().await.contains(path) {
            return Ok(true);
        }
        if self.files.lock().await.contains_key(path) {
            return Ok(false);
        }
        Err(ConvertError::NotFound {
            path: path.to_string(),
        })
    }
}

pub struct MockConfig {
    pub input_path: String,
    pub pretty_json: bool,
}

impl MockConfig {
    pub fn new(input_path: &str) -> Self {
        Self {
            input_path: input_path.to_string(),
            pretty_json: false,
        }
    }
}

impl ConfigProvider for MockConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn notebook_suffix(&self) -> &str {
        ".ipynb"
    }

    fn export_extension(&self) -> &str {
        ".Dockerfile"
    }

    fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}
