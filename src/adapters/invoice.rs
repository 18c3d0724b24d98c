use crate::domain::model::{Invoice, ReportEvent};
use crate::domain::ports::{InvoiceGenerator, ReportSink};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_file_name};

/// Stands in for a PDF rendering backend; no file is written.
pub struct PdfInvoiceGenerator<R: ReportSink> {
    reporter: R,
}

impl<R: ReportSink> PdfInvoiceGenerator<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }
}

impl<R: ReportSink> InvoiceGenerator for PdfInvoiceGenerator<R> {
    fn generate_invoice(&self, file_name: &str) -> Result<Invoice> {
        validate_file_name("file_name", file_name)?;
        validate_file_extension("file_name", file_name, &["pdf"])?;

        tracing::debug!(file_name, "Generating PDF invoice");
        self.reporter.emit(&ReportEvent::InvoiceGenerated {
            file_name: file_name.to_string(),
        })?;

        Ok(Invoice {
            file_name: file_name.to_string(),
        })
    }
}
