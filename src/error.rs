//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing token, or the server answered 401/403
    #[error("not authorized: {0}")]
    Auth(String),
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),
    /// Any other non-2xx status
    #[error("server returned status {status}")]
    Server { status: u16 },
    /// Response body did not match the expected schema
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Aborted because the owning page was torn down
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Classify a non-2xx status
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Auth(format!("status {}", status)),
            _ => ApiError::Server { status },
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(ApiError::from_status(401), ApiError::Auth(_)));
        assert!(matches!(ApiError::from_status(403), ApiError::Auth(_)));
        assert_eq!(ApiError::from_status(500), ApiError::Server { status: 500 });
        assert_eq!(ApiError::from_status(404), ApiError::Server { status: 404 });
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ApiError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
