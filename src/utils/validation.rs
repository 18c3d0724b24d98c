use crate::utils::error::{OrderError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::invalid_input(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(OrderError::invalid_input(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(OrderError::invalid_input(
            field_name,
            value,
            "Value must not be negative",
        ));
    }
    Ok(())
}

pub fn validate_file_name(field_name: &str, file_name: &str) -> Result<()> {
    validate_non_empty_string(field_name, file_name)?;

    if file_name.contains('\0') {
        return Err(OrderError::invalid_input(
            field_name,
            file_name,
            "File name contains null bytes",
        ));
    }

    // 只接受單純檔名，不接受路徑
    if file_name.contains('/') || file_name.contains('\\') {
        return Err(OrderError::invalid_input(
            field_name,
            file_name,
            "File name must not contain path separators",
        ));
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file_name: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(OrderError::invalid_input(
            field_name,
            file_name,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(OrderError::invalid_input(
            field_name,
            file_name,
            "File has no extension or invalid filename",
        )),
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    validate_non_empty_string(field_name, email)?;

    if !email_regex().is_match(email) {
        return Err(OrderError::invalid_input(
            field_name,
            email,
            "Value is not a valid email address",
        ));
    }
    Ok(())
}
