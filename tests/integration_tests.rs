use anyhow::Result;
use dockerfile_notebook::{
    convert_dockerfile, CellType, ConversionEngine, ConversionSettings, ConvertError,
    ExportPipeline, ImportPipeline, LocalStorage, TomlConfig, NOTEBOOK_METADATA,
};
use std::collections::HashSet;
use tempfile::TempDir;

const DOCKERFILE: &str = "#md # Web image\n#md Builds the web frontend.\n\nFROM node:20 AS build\nWORKDIR /app\n\n#cellStart\nCOPY package.json .\n\nRUN npm ci\n#cellEnd\n\n#mg %tag web\nRUN npm run build\n";

fn storage(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_string_lossy().to_string())
}

fn settings(path: &str) -> ConversionSettings {
    ConversionSettings::new(path, &TomlConfig::default(), false)
}

#[tokio::test]
async fn test_import_writes_notebook_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("Dockerfile"), DOCKERFILE)?;

    let pipeline = ImportPipeline::new(storage(&temp_dir), settings("Dockerfile"));
    let output_path = ConversionEngine::new(pipeline).run().await?;
    assert_eq!(output_path, "Dockerfile.ipynb");

    let written = std::fs::read_to_string(temp_dir.path().join("Dockerfile.ipynb"))?;
    let json: serde_json::Value = serde_json::from_str(&written)?;

    assert_eq!(json["nbformat"], 4);
    assert_eq!(json["nbformat_minor"], 5);
    assert_eq!(json["metadata"], serde_json::to_value(NOTEBOOK_METADATA)?);

    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0]["cell_type"], "markdown");
    assert_eq!(
        cells[0]["source"],
        serde_json::json!(["# Web image\n", "Builds the web frontend."])
    );
    assert_eq!(
        cells[2]["source"],
        serde_json::json!(["COPY package.json .\n", "\n", "RUN npm ci"])
    );
    assert_eq!(
        cells[3]["source"],
        serde_json::json!(["%tag web\n", "RUN npm run build\n", ""])
    );

    let ids: HashSet<&str> = cells.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), cells.len());
    Ok(())
}

#[tokio::test]
async fn test_import_rejects_non_dockerfile() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("README.md"), "hello")?;

    let pipeline = ImportPipeline::new(storage(&temp_dir), settings("README.md"));
    let err = ConversionEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, ConvertError::NotADockerfile { .. }));
    assert!(!temp_dir.path().join("README.md.ipynb").exists());
    Ok(())
}

#[tokio::test]
async fn test_import_reports_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let pipeline = ImportPipeline::new(storage(&temp_dir), settings("api/Dockerfile"));
    let err = ConversionEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, ConvertError::NotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_import_rejects_directory_named_like_dockerfile() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("dockerfile"))?;

    let pipeline = ImportPipeline::new(storage(&temp_dir), settings("dockerfile"));
    let err = ConversionEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, ConvertError::IsADirectory { .. }));
    Ok(())
}

#[tokio::test]
async fn test_export_of_import_reimports_to_same_cells() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("Dockerfile"), DOCKERFILE)?;

    let import = ImportPipeline::new(storage(&temp_dir), settings("Dockerfile"));
    let notebook_path = ConversionEngine::new(import).run().await?;

    let export = ExportPipeline::new(storage(&temp_dir), settings(&notebook_path));
    let dockerfile_path = ConversionEngine::new(export).run().await?;
    assert_eq!(dockerfile_path, "Dockerfile.Dockerfile");

    let exported = std::fs::read_to_string(temp_dir.path().join(&dockerfile_path))?;
    let original = convert_dockerfile(DOCKERFILE);
    let again = convert_dockerfile(&exported);

    assert_eq!(again.cells.len(), original.cells.len());
    for (a, b) in again.cells.iter().zip(&original.cells) {
        assert_eq!(a.cell_type, b.cell_type);
        assert_eq!(a.source, b.source);
    }
    assert_eq!(again.cells[0].cell_type, CellType::Markdown);
    Ok(())
}

#[tokio::test]
async fn test_custom_suffix_from_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("Dockerfile"), "FROM alpine")?;

    let file_config = TomlConfig::from_toml_str("[convert]\nnotebook_suffix = \".nb.ipynb\"\n")?;
    let settings = ConversionSettings::new("Dockerfile", &file_config, false);

    let pipeline = ImportPipeline::new(storage(&temp_dir), settings);
    let output_path = ConversionEngine::new(pipeline).run().await?;

    assert_eq!(output_path, "Dockerfile.nb.ipynb");
    assert!(temp_dir.path().join("Dockerfile.nb.ipynb").exists());
    Ok(())
}
