use crate::utils::error::{ExportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed: &str) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if extension == allowed => Ok(()),
        Some(extension) => Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Expected: {}",
                extension, allowed
            ),
        }),
        None => Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}
