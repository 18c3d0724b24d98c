use anyhow::Result;
use order_service::utils::validation::Validate;
use order_service::{
    BasicOrderProcessor, EmailService, OrderService, OutputFormat, PdfInvoiceGenerator,
    StreamReporter, TomlConfig,
};
use std::sync::Arc;
use tempfile::TempDir;

/// TOML 訂單檔 -> OrderService -> JSON 報告
#[test]
fn test_toml_order_produces_json_report_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("order.toml");
    std::fs::write(
        &config_path,
        r#"
[order]
price = 7.25
quantity = 4
customer_name = "Ada Lovelace"
address = "12 Analytical Row"

[invoice]
file_name = "order_789.pdf"

[notification]
email = "ada@example.com"

[output]
format = "json"
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    let format = config.output_format().unwrap_or_default();
    assert_eq!(format, OutputFormat::Json);

    let reporter = Arc::new(StreamReporter::new(Vec::new(), format));
    let service = OrderService::new(
        Arc::new(BasicOrderProcessor::new(reporter.clone())),
        Arc::new(PdfInvoiceGenerator::new(reporter.clone())),
        Arc::new(EmailService::new(reporter.clone())),
    );

    let receipt = service.process_order(&config.order_request())?;
    assert_eq!(receipt.total, 29.0);
    drop(service);

    let output = match Arc::try_unwrap(reporter) {
        Ok(reporter) => String::from_utf8(reporter.into_inner())?,
        Err(_) => panic!("reporter still shared"),
    };
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line))
        .collect::<std::result::Result<_, _>>()?;

    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "total_calculated");
    assert_eq!(events[0]["total"], 29.0);
    assert_eq!(events[1]["event"], "order_placed");
    assert_eq!(events[1]["customer_name"], "Ada Lovelace");
    assert_eq!(events[2]["file_name"], "order_789.pdf");
    assert_eq!(events[3]["email"], "ada@example.com");
    Ok(())
}

#[test]
fn test_missing_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let result = TomlConfig::from_file(temp_dir.path().join("missing.toml"));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Cannot read config file"));
    assert!(err.is_recoverable());
}

#[test]
fn test_text_report_matches_console_format() -> Result<()> {
    let reporter = Arc::new(StreamReporter::new(Vec::new(), OutputFormat::Text));
    let service = OrderService::new(
        Arc::new(BasicOrderProcessor::new(reporter.clone())),
        Arc::new(PdfInvoiceGenerator::new(reporter.clone())),
        Arc::new(EmailService::new(reporter.clone())),
    );

    service.process_order(&Default::default())?;
    drop(service);

    let output = match Arc::try_unwrap(reporter) {
        Ok(reporter) => String::from_utf8(reporter.into_inner())?,
        Err(_) => panic!("reporter still shared"),
    };
    assert_eq!(
        output,
        "Order total: $20.0\n\
         Order placed for John Doe at 123 Main St\n\
         Invoice generated: order_123.pdf\n\
         Email notification sent to: johndoe@example.com\n"
    );
    Ok(())
}
