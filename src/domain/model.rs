use serde::{Deserialize, Serialize};
use std::fmt;

/// All inputs one run of the order workflow needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub price: f64,
    pub quantity: u32,
    pub customer_name: String,
    pub address: String,
    pub file_name: String,
    pub email: String,
}

impl Default for OrderRequest {
    fn default() -> Self {
        Self {
            price: 10.0,
            quantity: 2,
            customer_name: "John Doe".to_string(),
            address: "123 Main St".to_string(),
            file_name: "order_123.pdf".to_string(),
            email: "johndoe@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub total: f64,
    pub invoice: Invoice,
    pub notification: Notification,
}

/// Observable output of a simulated operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    TotalCalculated { total: f64 },
    OrderPlaced { customer_name: String, address: String },
    InvoiceGenerated { file_name: String },
    NotificationSent { email: String },
}

/// Plain decimal inside [1e-3, 1e7), `d.dddE±n` outside; always at least one
/// fractional digit.
pub fn format_total(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug 格式在這個範圍內是最短的十進位表示，且保留小數點: 20.0 而不是 20
        return format!("{:?}", value);
    }

    // {:e} 給出最短位數的科學記號，例如 1.2345678e7
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEvent::TotalCalculated { total } => {
                write!(f, "Order total: ${}", format_total(*total))
            }
            ReportEvent::OrderPlaced {
                customer_name,
                address,
            } => write!(f, "Order placed for {} at {}", customer_name, address),
            ReportEvent::InvoiceGenerated { file_name } => {
                write!(f, "Invoice generated: {}", file_name)
            }
            ReportEvent::NotificationSent { email } => {
                write!(f, "Email notification sent to: {}", email)
            }
        }
    }
}
