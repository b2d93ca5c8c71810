pub mod settings;
pub mod toml_config;

pub use settings::ConversionSettings;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dockerfile-notebook")]
#[command(about = "Convert annotated Dockerfiles into Jupyter notebooks and back")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory that relative paths resolve against
    #[arg(long, global = true, default_value = ".")]
    pub root: String,

    /// Pretty-print the notebook JSON
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a Dockerfile into `<path>.ipynb`
    Import { path: String },
    /// Convert a notebook back into a Dockerfile
    Export { path: String },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn path(&self) -> &str {
        match self {
            Command::Import { path } | Command::Export { path } => path,
        }
    }
}
