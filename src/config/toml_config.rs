use crate::adapters::reporter::OutputFormat;
use crate::domain::model::OrderRequest;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub order: OrderSection,
    pub invoice: InvoiceSection,
    pub notification: NotificationSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSection {
    pub price: f64,
    pub quantity: u32,
    pub customer_name: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceSection {
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSection {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OrderError::ConfigError {
            field: path.display().to_string(),
            message: format!("Cannot read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CUSTOMER_EMAIL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn order_request(&self) -> OrderRequest {
        OrderRequest {
            price: self.order.price,
            quantity: self.order.quantity,
            customer_name: self.order.customer_name.clone(),
            address: self.order.address.clone(),
            file_name: self.invoice.file_name.clone(),
            email: self.notification.email.clone(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.order_request().validate()
    }
}
