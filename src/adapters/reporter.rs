use crate::domain::model::ReportEvent;
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use serde::Deserialize;
use std::io::{Stdout, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes one line per event to any `Write` target.
pub struct StreamReporter<W: Write + Send> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl<W: Write + Send> StreamReporter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub type StdoutReporter = StreamReporter<Stdout>;

impl StreamReporter<Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write + Send> ReportSink for StreamReporter<W> {
    fn emit(&self, event: &ReportEvent) -> Result<()> {
        let line = match self.format {
            OutputFormat::Text => event.to_string(),
            OutputFormat::Json => serde_json::to_string(event)?,
        };

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps every emitted event in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl ReportSink for MemoryReporter {
    fn emit(&self, event: &ReportEvent) -> Result<()> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_reporter_text_lines() {
        let reporter = StreamReporter::new(Vec::new(), OutputFormat::Text);
        reporter
            .emit(&ReportEvent::TotalCalculated { total: 20.0 })
            .unwrap();
        reporter
            .emit(&ReportEvent::NotificationSent {
                email: "johndoe@example.com".to_string(),
            })
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Order total: $20.0\nEmail notification sent to: johndoe@example.com\n"
        );
    }

    #[test]
    fn test_stream_reporter_json_lines() {
        let reporter = StreamReporter::new(Vec::new(), OutputFormat::Json);
        reporter
            .emit(&ReportEvent::TotalCalculated { total: 20.0 })
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["event"], "total_calculated");
        assert_eq!(value["total"], 20.0);
    }

    #[test]
    fn test_memory_reporter_clones_share_events() {
        let reporter = MemoryReporter::new();
        let handle = reporter.clone();
        handle
            .emit(&ReportEvent::InvoiceGenerated {
                file_name: "order_123.pdf".to_string(),
            })
            .unwrap();

        assert_eq!(reporter.lines(), vec!["Invoice generated: order_123.pdf"]);
    }
}
