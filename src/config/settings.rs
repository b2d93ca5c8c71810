use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path, Validate};

/// Effective settings for one conversion: file values with command-line overrides applied.
#[derive(Debug, Clone)]
pub struct ConversionSettings {
    pub input_path: String,
    pub notebook_suffix: String,
    pub export_extension: String,
    pub pretty_json: bool,
}

impl ConversionSettings {
    pub fn new(input_path: impl Into<String>, file: &TomlConfig, pretty_override: bool) -> Self {
        Self {
            input_path: input_path.into(),
            notebook_suffix: file.notebook_suffix().to_string(),
            export_extension: file.export_extension().to_string(),
            pretty_json: pretty_override || file.pretty(),
        }
    }
}

impl ConfigProvider for ConversionSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn notebook_suffix(&self) -> &str {
        &self.notebook_suffix
    }

    fn export_extension(&self) -> &str {
        &self.export_extension
    }

    fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}

impl Validate for ConversionSettings {
    fn validate(&self) -> Result<()> {
        validate_path("path", &self.input_path)?;
        validate_extension("convert.notebook_suffix", &self.notebook_suffix)?;
        validate_extension("export.extension", &self.export_extension)?;
        Ok(())
    }
}
