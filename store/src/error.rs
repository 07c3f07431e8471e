use thiserror::Error;

/// Failure taxonomy for store writes.
///
/// `Configuration` is an operator problem (missing or rejected credential)
/// and must be answered with a generic message that never echoes the token.
/// `Persistence` is everything else: network, store outage, undecodable
/// response. No write is retried automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("content store credential missing or rejected: {0}")]
    Configuration(String),
    #[error("content store write failed: {0}")]
    Persistence(String),
}

impl StoreError {
    /// Classify a non-success HTTP status from the store. The store answers
    /// 401 for a bad token and 403 for a token without write grants; both
    /// are deployment problems, not transient failures.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            StoreError::Configuration(format!("store rejected credentials ({})", status))
        } else {
            StoreError::Persistence(format!("store returned {}: {}", status, body))
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, StoreError::Configuration(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        // Connection and decode failures are transient from the caller's
        // point of view; auth failures never surface as reqwest::Error.
        StoreError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_401_and_403_are_configuration() {
        assert!(StoreError::from_status(StatusCode::UNAUTHORIZED, "").is_configuration());
        assert!(StoreError::from_status(StatusCode::FORBIDDEN, "").is_configuration());
    }

    #[test]
    fn test_other_statuses_are_persistence() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert!(!StoreError::from_status(status, "boom").is_configuration());
        }
    }

    #[test]
    fn test_configuration_message_has_no_token_material() {
        let err = StoreError::from_status(StatusCode::UNAUTHORIZED, "token sk-secret rejected");
        assert!(!err.to_string().contains("sk-secret"));
    }
}
