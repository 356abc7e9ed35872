//! Target URL validation.
//!
//! A shortened target must be an absolute URL carrying both a scheme and a
//! host. Path, query and fragment are stored exactly as submitted.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must be absolute with a scheme and host")]
    MissingHost,
}

/// Validates that `input` is an absolute URL with scheme and host.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for unparseable input and
/// [`TargetUrlError::MissingHost`] for URLs without a host component
/// (e.g. `mailto:`).
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none() {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}
