use crate::utils::error::{Result, ScanError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScanError::ConfigError {
            message: format!("No {} is specified.", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ScanError::ConfigError {
            message: format!("Invalid {}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ScanError::ConfigError {
        message: format!("No {} is specified.", field_name),
    })
}
