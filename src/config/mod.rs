#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::model::OrderRequest;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email, validate_file_name, validate_non_empty_string, validate_non_negative_amount,
    Validate,
};

/// Checks what every capability variant requires. Variant-specific rules
/// (such as the `.pdf` extension) stay with the variant.
impl Validate for OrderRequest {
    fn validate(&self) -> Result<()> {
        validate_non_negative_amount("price", self.price)?;
        validate_non_empty_string("customer_name", &self.customer_name)?;
        validate_non_empty_string("address", &self.address)?;
        validate_file_name("file_name", &self.file_name)?;
        validate_email("email", &self.email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_valid() {
        assert!(OrderRequest::default().validate().is_ok());
    }

    #[test]
    fn test_request_with_bad_email_is_invalid() {
        let request = OrderRequest {
            email: "johndoe".to_string(),
            ..OrderRequest::default()
        };
        assert!(request.validate().is_err());
    }
}
