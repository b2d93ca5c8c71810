use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn is_dir(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn notebook_suffix(&self) -> &str;
    fn export_extension(&self) -> &str;
    fn pretty_json(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Source: Send;
    type Output: Send;

    async fn extract(&self) -> Result<Self::Source>;
    async fn transform(&self, source: Self::Source) -> Result<Self::Output>;
    async fn load(&self, output: Self::Output) -> Result<String>;
}
