use clap::Parser;
use csv2yml::utils::{logger, validation::Validate};
use csv2yml::{CliConfig, ConvertEngine, ConvertPipeline, StdoutSink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv2yml CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立輸出與轉換管道
    let sink = StdoutSink::new();
    let pipeline = ConvertPipeline::new(sink, config);

    // 創建引擎並運行
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Output written to: {}", destination);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                csv2yml::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                csv2yml::utils::error::ErrorSeverity::Medium => 2, // 空輸入
                csv2yml::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                csv2yml::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
