use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_extension(field_name: &str, value: &str) -> Result<()> {
    if value.len() < 2 || !value.starts_with('.') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Extension must start with '.' and name a suffix".to_string(),
        });
    }

    if value.contains(['/', '\\']) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Extension cannot contain path separators".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Rejects paths whose file name does not end in `dockerfile` (any case).
pub fn validate_dockerfile_path(path: &str) -> Result<()> {
    if path.ends_with('/') || !path.to_lowercase().ends_with("dockerfile") {
        return Err(ConvertError::NotADockerfile {
            path: path.to_string(),
        });
    }
    Ok(())
}

pub fn validate_notebook_path(path: &str) -> Result<()> {
    if !path.to_lowercase().ends_with(".ipynb") {
        return Err(ConvertError::NotANotebook {
            path: path.to_string(),
        });
    }
    Ok(())
}
