use crate::core::OutputSink;
use crate::utils::error::Result;
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    async fn write_all(&self, data: &[u8]) -> Result<()> {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        writer.write_all(data)?;
        writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
