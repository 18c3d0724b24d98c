use crate::adapters::reporter::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::OrderRequest;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-service")]
#[command(about = "Process a single order: total, placement, invoice, notification")]
pub struct CliConfig {
    #[arg(long, default_value_t = 10.0)]
    pub price: f64,

    #[arg(long, default_value_t = 2)]
    pub quantity: u32,

    #[arg(long, default_value = "John Doe")]
    pub customer_name: String,

    #[arg(long, default_value = "123 Main St")]
    pub address: String,

    #[arg(long, default_value = "order_123.pdf")]
    pub file_name: String,

    #[arg(long, default_value = "johndoe@example.com")]
    pub email: String,

    /// Path to a TOML order file; replaces the order flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format written to stdout
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Resolves the order and report format. A config file wins over the order
    /// flags; `--output` wins over the file's `[output]` section.
    pub fn resolve(&self) -> Result<(OrderRequest, OutputFormat)> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading order from: {}", path);
                let file = TomlConfig::from_file(path)?;
                let format = self
                    .output
                    .or_else(|| file.output_format())
                    .unwrap_or_default();
                Ok((file.order_request(), format))
            }
            None => Ok((self.order_request(), self.output.unwrap_or_default())),
        }
    }

    pub fn order_request(&self) -> OrderRequest {
        OrderRequest {
            price: self.price,
            quantity: self.quantity,
            customer_name: self.customer_name.clone(),
            address: self.address.clone(),
            file_name: self.file_name.clone(),
            email: self.email.clone(),
        }
    }
}
