use crate::domain::model::{Invoice, Notification, ReportEvent};
use crate::utils::error::Result;

/// Output channel the capabilities report to.
pub trait ReportSink: Send + Sync {
    fn emit(&self, event: &ReportEvent) -> Result<()>;
}

pub trait OrderProcessor: Send + Sync {
    /// Returns `price * quantity`. Nothing is stored on the processor.
    fn calculate_total(&self, price: f64, quantity: u32) -> Result<f64>;
    fn place_order(&self, customer_name: &str, address: &str) -> Result<()>;
}

pub trait InvoiceGenerator: Send + Sync {
    fn generate_invoice(&self, file_name: &str) -> Result<Invoice>;
}

pub trait EmailNotifier: Send + Sync {
    fn send_email_notification(&self, email: &str) -> Result<Notification>;
}

impl<T: ReportSink + ?Sized> ReportSink for std::sync::Arc<T> {
    fn emit(&self, event: &ReportEvent) -> Result<()> {
        (**self).emit(event)
    }
}
