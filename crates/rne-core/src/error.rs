//! Error types for the RNE schedule scraper.

use thiserror::Error;

/// Error type for scraper operations
#[derive(Error, Debug)]
pub enum RneError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to write XML output
    #[error("Failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O failure while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generated XML was not valid UTF-8
    #[error("Generated XML was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, RneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = RneError::Parse("missing element".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: missing element");
    }

    #[test]
    fn test_error_display_element_not_found() {
        let error = RneError::ElementNotFound(".hour".to_string());
        assert_eq!(error.to_string(), "Element not found: .hour");
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = RneError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "Invalid URL: not-a-url");
    }
}
