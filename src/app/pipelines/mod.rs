pub mod export_pipeline;
pub mod import_pipeline;

#[cfg(test)]
pub(crate) mod test_support;

pub use export_pipeline::ExportPipeline;
pub use import_pipeline::ImportPipeline;
