//! Error taxonomy for backend calls and client-side session handling.

use crate::utils::constants::MSG_SAVE_FAILED;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response received (DNS, CORS, offline...)
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 404 from the backend. The wizard uses this as a "no profile yet" signal.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated call attempted without a stored session token
    #[error("not logged in")]
    MissingAuth,

    #[error("parse error: {0}")]
    Parse(String),

    /// Well-formed envelope with `success: false`
    #[error("rejected by backend: {0}")]
    Rejected(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(message),
            404 => Self::NotFound(message),
            _ => Self::Http { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Single user-facing string for the UI layer
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) | Self::Unauthorized(message) => message.clone(),
            Self::MissingAuth => "Your session has ended, please log in again".to_string(),
            _ => MSG_SAVE_FAILED.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<gloo_storage::errors::StorageError> for ApiError {
    fn from(e: gloo_storage::errors::StorageError) -> Self {
        Self::Storage(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert!(ApiError::from_status(404, "Company profile not found".into()).is_not_found());
        assert_eq!(
            ApiError::from_status(401, "Invalid token".into()),
            ApiError::Unauthorized("Invalid token".into())
        );
        assert_eq!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Http { status: 500, message: "boom".into() }
        );
    }

    #[test]
    fn transport_errors_collapse_to_generic_message() {
        assert_eq!(ApiError::Network("offline".into()).user_message(), MSG_SAVE_FAILED);
        assert_eq!(ApiError::Http { status: 502, message: "Bad Gateway".into() }.user_message(), MSG_SAVE_FAILED);
        assert_eq!(ApiError::Rejected("Company registration failed".into()).user_message(), "Company registration failed");
    }
}
