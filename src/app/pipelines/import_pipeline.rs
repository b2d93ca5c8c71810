use crate::core::builder::build;
use crate::core::segmenter::segment;
use crate::core::{CellType, ConfigProvider, NotebookDocument, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::validate_dockerfile_path;

/// Dockerfile on storage -> notebook JSON next to it.
pub struct ImportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ImportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn output_path(&self) -> String {
        format!(
            "{}{}",
            self.config.input_path(),
            self.config.notebook_suffix()
        )
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ImportPipeline<S, C> {
    type Source = String;
    type Output = NotebookDocument;

    async fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        validate_dockerfile_path(path)?;

        if self.storage.is_dir(path).await? {
            return Err(ConvertError::IsADirectory {
                path: path.to_string(),
            });
        }

        let data = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path);

        String::from_utf8(data).map_err(|source| ConvertError::EncodingError {
            path: path.to_string(),
            source,
        })
    }

    async fn transform(&self, text: String) -> Result<NotebookDocument> {
        let blocks = segment(&text);
        tracing::debug!("Segmented Dockerfile into {} blocks", blocks.len());

        let document = build(blocks);
        let markdown = document
            .cells
            .iter()
            .filter(|cell| cell.cell_type == CellType::Markdown)
            .count();
        tracing::info!(
            "Built notebook with {} cells ({} markdown)",
            document.cells.len(),
            markdown
        );

        Ok(document)
    }

    async fn load(&self, document: NotebookDocument) -> Result<String> {
        let output_path = self.output_path();
        let json = document.to_json(self.config.pretty_json())?;

        tracing::debug!("Writing notebook ({} bytes) to {}", json.len(), output_path);
        self.storage.write_file(&output_path, json.as_bytes()).await?;

        Ok(output_path)
    }
}
