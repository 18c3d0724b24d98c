pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{
    BasicOrderProcessor, EmailService, MemoryReporter, OutputFormat, PdfInvoiceGenerator,
    StdoutReporter, StreamReporter,
};
pub use crate::core::order_service::OrderService;
pub use domain::model::{Invoice, Notification, OrderReceipt, OrderRequest, ReportEvent};
pub use domain::ports::{EmailNotifier, InvoiceGenerator, OrderProcessor, ReportSink};
pub use utils::error::{OrderError, Result};
