use crate::utils::error::{CleanError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 國碼允許空字串（表示不補國碼），否則必須是可帶 `+` 前綴的 1~4 位數字
pub fn validate_country_code(field_name: &str, value: &str) -> Result<()> {
    use regex::Regex;
    let re = Regex::new(r"^\+?[0-9]{1,4}$").unwrap();

    if value.is_empty() || re.is_match(value) {
        Ok(())
    } else {
        Err(CleanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Country code must be 1-4 digits, optionally prefixed with '+'".to_string(),
        })
    }
}
