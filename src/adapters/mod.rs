// Adapters layer: concrete capability implementations and report sinks.

pub mod email;
pub mod invoice;
pub mod order_processor;
pub mod reporter;

pub use email::EmailService;
pub use invoice::PdfInvoiceGenerator;
pub use order_processor::BasicOrderProcessor;
pub use reporter::{MemoryReporter, OutputFormat, StdoutReporter, StreamReporter};
