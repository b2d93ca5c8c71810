use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_extension, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NOTEBOOK_SUFFIX: &str = ".ipynb";
pub const DEFAULT_EXPORT_EXTENSION: &str = ".Dockerfile";
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub notebook_suffix: Option<String>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NOTEBOOK_SUFFIX})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn notebook_suffix(&self) -> &str {
        self.convert
            .notebook_suffix
            .as_deref()
            .unwrap_or(DEFAULT_NOTEBOOK_SUFFIX)
    }

    pub fn export_extension(&self) -> &str {
        self.export
            .extension
            .as_deref()
            .unwrap_or(DEFAULT_EXPORT_EXTENSION)
    }

    pub fn pretty(&self) -> bool {
        self.convert.pretty.unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_extension("convert.notebook_suffix", self.notebook_suffix())?;
        validate_extension("export.extension", self.export_extension())?;
        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }
        validate_one_of(
            "logging.level",
            self.log_level(),
            &["trace", "debug", "info", "warn", "error"],
        )?;
        Ok(())
    }
}
