//! Journey API error types.

use super::convert::ConversionError;

/// Errors that can occur when talking to the journey API.
#[derive(Debug, thiserror::Error)]
pub enum KoleoError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the client identification headers
    #[error("unauthorized: the API rejected the client identification headers")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// A configured header value cannot be sent
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// Response decoded but violates domain rules
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = KoleoError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = KoleoError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = KoleoError::InvalidHeader("X-KOLEO-Client");
        assert_eq!(err.to_string(), "invalid header value for X-KOLEO-Client");

        let err = KoleoError::Conversion(ConversionError::InvalidTime("x".into()));
        assert_eq!(err.to_string(), "invalid timestamp: x");
    }
}
