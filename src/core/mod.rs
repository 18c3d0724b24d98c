pub mod order_service;

pub use crate::domain::model::{Invoice, Notification, OrderReceipt, OrderRequest, ReportEvent};
pub use crate::domain::ports::{EmailNotifier, InvoiceGenerator, OrderProcessor, ReportSink};
pub use crate::utils::error::Result;
