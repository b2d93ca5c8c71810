use crate::core::exporter::{export_cells, parse_notebook};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::validate_notebook_path;
use std::path::Path;

/// Notebook on storage -> annotated Dockerfile next to it.
pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// `web.ipynb` becomes `web<export_extension>`.
    pub fn output_path(&self) -> String {
        let stem = Path::new(self.config.input_path()).with_extension("");
        format!(
            "{}{}",
            stem.to_string_lossy(),
            self.config.export_extension()
        )
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    type Source = String;
    type Output = String;

    async fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        validate_notebook_path(path)?;

        if self.storage.is_dir(path).await? {
            return Err(ConvertError::IsADirectory {
                path: path.to_string(),
            });
        }

        let data = self.storage.read_file(path).await?;
        String::from_utf8(data).map_err(|source| ConvertError::EncodingError {
            path: path.to_string(),
            source,
        })
    }

    async fn transform(&self, json: String) -> Result<String> {
        let cells = parse_notebook(&json)?;
        tracing::info!("Exporting {} cells", cells.len());
        Ok(export_cells(&cells))
    }

    async fn load(&self, dockerfile: String) -> Result<String> {
        let output_path = self.output_path();
        self.storage
            .write_file(&output_path, dockerfile.as_bytes())
            .await?;
        Ok(output_path)
    }
}
