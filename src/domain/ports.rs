use crate::domain::model::{Table, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait OutputSink: Send + Sync {
    fn write_all(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Table>;
    async fn transform(&self, table: Table) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
