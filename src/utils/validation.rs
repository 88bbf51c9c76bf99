use crate::utils::error::{Result, SpecError};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl Into<String>, reason: impl Into<String>) -> SpecError {
    SpecError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// Spec endpoints must be absolute http(s) URLs with a host.
pub fn validate_spec_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "spec URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("not an absolute URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("spec can only be fetched over http or https, not {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, url_str, "spec URL has no host"));
    }

    Ok(())
}

/// The fallback must name a file, not a directory-like path.
pub fn validate_spec_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(invalid(field_name, shown, "local spec path cannot be empty"));
    }
    if shown.contains('\0') {
        return Err(invalid(field_name, shown, "local spec path contains null bytes"));
    }
    if path.file_name().is_none() {
        return Err(invalid(field_name, shown, "local spec path does not name a file"));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SpecError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
