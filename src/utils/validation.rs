use crate::utils::error::{HospitalError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Form fields arrive trimmed; anything left empty counts as missing.
pub fn validate_required_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HospitalError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn parse_age(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| HospitalError::InvalidInput {
            field: "age".to_string(),
            reason: format!("'{}' is not a non-negative whole number ({})", trimmed, e),
        })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(HospitalError::ConfigError {
            message: format!(
                "{} = '{}' is not supported. Valid values: {}",
                field_name,
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}
