use clap::Parser;
use dockerfile_notebook::core::Pipeline;
use dockerfile_notebook::utils::error::{ConvertError, ErrorSeverity};
use dockerfile_notebook::utils::{logger, validation::Validate};
use dockerfile_notebook::{
    CliConfig, Command, ConversionEngine, ConversionSettings, ExportPipeline, ImportPipeline,
    LocalStorage, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if cli.json_logs || file_config.json_logs() {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }

    tracing::info!("Starting dockerfile-notebook");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = file_config.validate() {
        fail(&e);
    }

    let settings = ConversionSettings::new(cli.command.path(), &file_config, cli.pretty);
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let storage = LocalStorage::new(cli.root.clone());
    let result = match cli.command {
        Command::Import { .. } => run(ImportPipeline::new(storage, settings)).await,
        Command::Export { .. } => run(ExportPipeline::new(storage, settings)).await,
    };

    match result {
        Ok(output_path) => {
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

async fn run<P: Pipeline>(pipeline: P) -> dockerfile_notebook::Result<String> {
    ConversionEngine::new(pipeline).run().await
}

fn fail(e: &ConvertError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
