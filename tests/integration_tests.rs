use csv2yml::core::OutputSink;
use csv2yml::utils::error::{ConvertError, Result};
use csv2yml::{CliConfig, ConvertEngine, ConvertPipeline};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

#[derive(Clone)]
struct CaptureSink {
    written: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn contents(&self) -> String {
        String::from_utf8(self.written.lock().await.clone()).unwrap()
    }
}

impl OutputSink for CaptureSink {
    async fn write_all(&self, data: &[u8]) -> Result<()> {
        let mut written = self.written.lock().await;
        written.extend_from_slice(data);
        Ok(())
    }

    fn describe(&self) -> String {
        "capture".to_string()
    }
}

fn write_input(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("input.csv");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn engine_for(input: String) -> (ConvertEngine<ConvertPipeline<CaptureSink, CliConfig>>, CaptureSink) {
    let config = CliConfig {
        input,
        verbose: false,
        monitor: false,
    };
    let sink = CaptureSink::new();
    let pipeline = ConvertPipeline::new(sink.clone(), config);
    (ConvertEngine::new(pipeline), sink)
}

#[tokio::test]
async fn test_example_document_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "name,age\nAlice,30\nBob,25\n");
    let (engine, sink) = engine_for(input);

    let destination = engine.run().await.unwrap();

    assert_eq!(destination, "capture");
    assert_eq!(
        sink.contents().await,
        "-\n  name: Alice\n  age: 30\n-\n  name: Bob\n  age: 25\n"
    );
}

#[tokio::test]
async fn test_header_only_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "name,age\n");
    let (engine, sink) = engine_for(input);

    engine.run().await.unwrap();

    assert_eq!(sink.contents().await, "");
}

#[tokio::test]
async fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.csv").to_str().unwrap().to_string();
    let (engine, sink) = engine_for(input);

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, ConvertError::IoError(_)));
    assert_eq!(sink.contents().await, "");
}

#[tokio::test]
async fn test_empty_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "");
    let (engine, sink) = engine_for(input);

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, ConvertError::EmptyInputError { .. }));
    assert_eq!(sink.contents().await, "");
}

#[tokio::test]
async fn test_rerun_produces_identical_output() {
    let dir = TempDir::new().unwrap();
    let content = "id,name,value\n1,Item 1,10\n2,Item 2,20\n3,Item 3,30\n";
    let input = write_input(&dir, content);

    let (first_engine, first_sink) = engine_for(input.clone());
    first_engine.run().await.unwrap();

    let (second_engine, second_sink) = engine_for(input);
    second_engine.run().await.unwrap();

    assert_eq!(first_sink.contents().await, second_sink.contents().await);
}

#[tokio::test]
async fn test_quoted_fields_are_unwrapped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "name,notes\n\"Smith, John\",\"said \"\"hi\"\"\"\n",
    );
    let (engine, sink) = engine_for(input);

    engine.run().await.unwrap();

    assert_eq!(
        sink.contents().await,
        "-\n  name: Smith, John\n  notes: said \"hi\"\n"
    );
}

#[tokio::test]
async fn test_crlf_input_matches_lf_input() {
    let dir = TempDir::new().unwrap();
    let crlf_input = write_input(&dir, "name,age\r\nAlice,30\r\nBob,25\r\n");
    let (engine, sink) = engine_for(crlf_input);

    engine.run().await.unwrap();

    assert_eq!(
        sink.contents().await,
        "-\n  name: Alice\n  age: 30\n-\n  name: Bob\n  age: 25\n"
    );
}

#[tokio::test]
async fn test_end_to_end_with_monitoring() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "name,age\nAlice,30\n");
    let config = CliConfig {
        input,
        verbose: true,
        monitor: true,
    };
    let sink = CaptureSink::new();
    let pipeline = ConvertPipeline::new(sink.clone(), config);
    let engine = ConvertEngine::new_with_monitoring(pipeline, true);

    engine.run().await.unwrap();

    assert_eq!(sink.contents().await, "-\n  name: Alice\n  age: 30\n");
}
