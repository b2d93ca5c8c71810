use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting conversion");

        tracing::debug!("Reading source");
        let source = self.pipeline.extract().await?;
        tracing::debug!(elapsed = ?started.elapsed(), "Source read");

        tracing::debug!("Converting");
        let output = self.pipeline.transform(source).await?;
        tracing::debug!(elapsed = ?started.elapsed(), "Converted");

        tracing::debug!("Writing output");
        let output_path = self.pipeline.load(output).await?;

        tracing::info!(
            elapsed = ?started.elapsed(),
            "Conversion finished, output saved to: {}",
            output_path
        );
        Ok(output_path)
    }
}
