use crate::core::{
    EmailNotifier, InvoiceGenerator, OrderProcessor, OrderReceipt, OrderRequest, Result,
};
use std::sync::Arc;

/// Runs the order workflow against injected capabilities.
///
/// Steps run in a fixed order: total, placement, invoice, notification.
/// The first failing step ends the run; earlier steps are not undone.
#[derive(Clone)]
pub struct OrderService {
    processor: Arc<dyn OrderProcessor>,
    invoices: Arc<dyn InvoiceGenerator>,
    notifier: Arc<dyn EmailNotifier>,
}

impl OrderService {
    pub fn new(
        processor: Arc<dyn OrderProcessor>,
        invoices: Arc<dyn InvoiceGenerator>,
        notifier: Arc<dyn EmailNotifier>,
    ) -> Self {
        Self {
            processor,
            invoices,
            notifier,
        }
    }

    pub fn process_order(&self, order: &OrderRequest) -> Result<OrderReceipt> {
        let span = tracing::info_span!("process_order", customer = %order.customer_name);
        let _guard = span.enter();

        tracing::info!("🚀 Processing order");

        let total = self.processor.calculate_total(order.price, order.quantity)?;
        self.processor
            .place_order(&order.customer_name, &order.address)?;
        let invoice = self.invoices.generate_invoice(&order.file_name)?;
        let notification = self.notifier.send_email_notification(&order.email)?;

        tracing::info!(total, "✅ Order processed");

        Ok(OrderReceipt {
            total,
            invoice,
            notification,
        })
    }
}
