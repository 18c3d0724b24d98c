use clap::Parser;
use order_service::utils::{logger, validation::Validate};
use order_service::{
    BasicOrderProcessor, CliConfig, EmailService, OrderService, PdfInvoiceGenerator,
    StdoutReporter,
};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting order-service");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 解析並驗證訂單
    let resolved = config.resolve().and_then(|(request, format)| {
        request.validate()?;
        Ok((request, format))
    });
    let (request, format) = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Order validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 組裝各項能力並注入 OrderService
    let reporter = Arc::new(StdoutReporter::stdout(format));
    let service = OrderService::new(
        Arc::new(BasicOrderProcessor::new(reporter.clone())),
        Arc::new(PdfInvoiceGenerator::new(reporter.clone())),
        Arc::new(EmailService::new(reporter)),
    );

    match service.process_order(&request) {
        Ok(receipt) => {
            tracing::info!(
                total = receipt.total,
                invoice = %receipt.invoice.file_name,
                notified = %receipt.notification.email,
                "✅ Order workflow completed"
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Order workflow failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
