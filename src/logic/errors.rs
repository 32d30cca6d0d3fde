//! Backend error classification
//!
//! Failures from `CampsiteClient` arrive as `anyhow::Error` chains wrapping
//! a `reqwest::Error`. These functions turn them into a category for the
//! status bar and a short message for toasts.

use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// Backend not listening
    ConnectionRefused,
    Timeout,
    /// Resource path missing on the backend (404)
    NotFound,
    /// Backend answered 5xx
    ServerError,
    /// Body was not the expected JSON
    Malformed,
    /// DNS or routing failure
    NetworkError,
    Other,
}

impl ErrorType {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "unreachable",
            ErrorType::Timeout => "timed out",
            ErrorType::NotFound => "not found",
            ErrorType::ServerError => "server error",
            ErrorType::Malformed => "bad response",
            ErrorType::NetworkError => "network error",
            ErrorType::Other => "failed",
        }
    }
}

fn find_reqwest(error: &Error) -> Option<&reqwest::Error> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
}

/// Classify a backend error, preferring the typed reqwest error over message text
pub fn classify_error(error: &Error) -> ErrorType {
    if let Some(http) = find_reqwest(error) {
        if http.is_timeout() {
            return ErrorType::Timeout;
        }
        if let Some(status) = http.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
        if http.is_decode() {
            return ErrorType::Malformed;
        }
    }

    let text = format!("{:#}", error).to_lowercase();
    if text.contains("connection refused") {
        ErrorType::ConnectionRefused
    } else if text.contains("timed out") || text.contains("timeout") {
        ErrorType::Timeout
    } else if text.contains("dns") || text.contains("network") {
        ErrorType::NetworkError
    } else {
        ErrorType::Other
    }
}

/// Short message for the UI: the reqwest error when present, else the root cause
pub fn format_error_message(error: &Error) -> String {
    match find_reqwest(error) {
        Some(http) => http.to_string(),
        None => error.root_cause().to_string(),
    }
}

/// Toasts starting with this are drawn in red
pub const ERROR_PREFIX: &str = "Error:";

pub fn error_toast(message: &str) -> String {
    format!("{} {}", ERROR_PREFIX, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_backend_is_recognized_through_context() {
        let err = anyhow::anyhow!("tcp connect: Connection refused (os error 111)")
            .context("Failed to fetch campsites");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn timeout_text_is_recognized() {
        let err = anyhow::anyhow!("operation timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn dns_failure_is_a_network_error() {
        let err = anyhow::anyhow!("dns lookup failed for campsites.local");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn unknown_errors_fall_through() {
        let err = anyhow::anyhow!("unexpected payload");
        assert_eq!(classify_error(&err), ErrorType::Other);
        assert_eq!(ErrorType::Other.label(), "failed");
    }

    #[test]
    fn message_is_the_root_cause_without_reqwest() {
        let err = anyhow::anyhow!("socket closed").context("Failed to fetch comments");
        assert_eq!(format_error_message(&err), "socket closed");
    }

    #[test]
    fn toast_carries_prefix() {
        assert_eq!(error_toast("boom"), "Error: boom");
        assert!(error_toast("boom").starts_with(ERROR_PREFIX));
    }
}
