use crate::domain::model::{CleanResult, Table};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn phone_column(&self) -> &str;
    fn country_code(&self) -> &str;
    /// 0 表示不限制
    fn max_rows(&self) -> usize;
    fn phones_only(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Table>;
    async fn transform(&self, table: Table) -> Result<CleanResult>;
    async fn load(&self, result: CleanResult) -> Result<String>;
}
