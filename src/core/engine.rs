use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion");

        let table = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} data rows ({} columns)",
            table.rows.len(),
            table.header.names.len()
        );
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(table).await?;
        tracing::info!("Rendered {} item blocks", result.items.len());
        self.monitor.log_stats("Transform");

        let destination = self.pipeline.load(result).await?;
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(destination)
    }
}
