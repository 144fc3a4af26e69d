use crate::core::{
    ConfigProvider, Header, OutputItem, OutputSink, Pipeline, Record, Table, TransformResult,
};
use crate::utils::error::{ConvertError, Result};
use std::fs::File;
use std::io::BufReader;

pub struct ConvertPipeline<S: OutputSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: OutputSink, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

#[async_trait::async_trait]
impl<S: OutputSink, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    async fn extract(&self) -> Result<Table> {
        let path = self.config.input_path();
        tracing::debug!("Reading CSV records from: {}", path);

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            // 欄位數不一致不是錯誤，配對時以較短者為準
            .flexible(true)
            .from_reader(BufReader::new(file));

        // 第一筆記錄是欄位名稱，不會出現在輸出中
        let names: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if names.is_empty() {
            return Err(ConvertError::EmptyInputError {
                path: path.to_string(),
            });
        }

        let header = Header { names };
        tracing::debug!("Header has {} fields", header.names.len());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(Record {
                fields: record.iter().map(String::from).collect(),
            });
        }

        Ok(Table { header, rows })
    }

    async fn transform(&self, table: Table) -> Result<TransformResult> {
        let mut items = Vec::with_capacity(table.rows.len());
        let mut yaml_output = String::new();

        for row in &table.rows {
            let mut fields = Vec::new();
            yaml_output.push_str("-\n");

            // 依位置配對欄位名稱與值，值原樣輸出
            for (name, value) in table.header.names.iter().zip(row.fields.iter()) {
                yaml_output.push_str("  ");
                yaml_output.push_str(name);
                yaml_output.push_str(": ");
                yaml_output.push_str(value);
                yaml_output.push('\n');
                fields.push((name.clone(), value.clone()));
            }

            items.push(OutputItem { fields });
        }

        Ok(TransformResult { items, yaml_output })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        tracing::debug!(
            "Writing {} bytes to {}",
            result.yaml_output.len(),
            self.sink.describe()
        );
        self.sink.write_all(result.yaml_output.as_bytes()).await?;
        Ok(self.sink.describe())
    }
}
