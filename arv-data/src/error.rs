//! Error types surfaced to the user as inline text.

use std::fmt;

/// Submit-time form validation failure.
///
/// `Display` is the exact inline text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of the five form fields was empty at submit time.
    MissingFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "All fields are required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Data acquisition failure.
///
/// `Display` carries the diagnostic detail for logging; the user-facing
/// inline text is always [`FetchError::USER_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The rainfall series could not be parsed.
    Parse(String),
    /// Reserved for a future network-backed provider.
    Unavailable(String),
}

impl FetchError {
    /// Inline text shown to the user when any acquisition step fails.
    pub const USER_MESSAGE: &'static str = "Error fetching data. Please try again.";
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Parse(detail) => write!(f, "failed to parse rainfall data: {}", detail),
            FetchError::Unavailable(detail) => {
                write!(f, "rainfall service unavailable: {}", detail)
            }
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_the_user_text() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required"
        );
    }

    #[test]
    fn fetch_error_display_keeps_detail() {
        let err = FetchError::Parse("bad row".to_string());
        assert!(err.to_string().contains("bad row"));
        assert_eq!(FetchError::USER_MESSAGE, "Error fetching data. Please try again.");
    }
}
