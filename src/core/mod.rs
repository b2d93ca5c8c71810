pub mod builder;
pub mod engine;
pub mod exporter;
pub mod segmenter;

pub use crate::domain::model::{Cell, CellType, NotebookDocument, RawBlock};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

/// Converts annotated Dockerfile text into a notebook document.
pub fn convert_dockerfile(text: &str) -> NotebookDocument {
    builder::build(segmenter::segment(text))
}
