use thiserror::Error;

/// Failure classes for list and bundle fetches.
///
/// `Http` and `Decode` mean the request reached the server but the outcome
/// was unusable (fix the payload); `Network` means the request itself never
/// completed (retry later). Views render these inline, never as a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx response. The message is the best human-readable text
    /// available: the body's `error` field when present, else status text.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request could not complete (DNS, connection refused, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match any expected shape.
    #[error("invalid response format: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        FetchError::Http {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_surfaces_the_best_message() {
        let e = FetchError::http(503, "backend unavailable");
        assert_eq!(e.to_string(), "backend unavailable");
        let e = FetchError::Decode("missing field `items`".into());
        assert!(e.to_string().contains("invalid response format"));
    }
}
