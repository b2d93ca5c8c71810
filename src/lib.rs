pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::storage::LocalStorage;
pub use app::pipelines::{ExportPipeline, ImportPipeline};
pub use config::{toml_config::TomlConfig, ConversionSettings};
pub use crate::core::{convert_dockerfile, engine::ConversionEngine};
pub use domain::model::{Cell, CellType, NotebookDocument, RawBlock, NOTEBOOK_METADATA};
pub use utils::error::{ConvertError, Result};
