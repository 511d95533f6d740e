use boardgen::utils::{logger, validation::Validate};
use boardgen::{BoardPipeline, CliConfig, GenEngine, LocalStorage};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting boardgen CLI");
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

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = BoardPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = GenEngine::new(pipeline);

    match engine.run() {
        Ok(source) => {
            tracing::info!("✅ Board source generated successfully!");
            println!("{}", source);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Board generation failed: {} (Category: {:?}, Severity: {:?})",
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
                boardgen::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                boardgen::utils::error::ErrorSeverity::Medium => 2, // 配置錯誤
                boardgen::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                boardgen::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
