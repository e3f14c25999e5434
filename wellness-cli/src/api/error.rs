use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// API-specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error(
        "Request rejected ({status}){}",
        .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build an error from a non-success status and the raw response body.
    /// A JSON body of the form `{"message": "..."}` is kept verbatim.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        ApiError::Rejected { status, message }
    }

    /// Message the server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::NotLoggedIn
                | ApiError::Rejected {
                    status: StatusCode::UNAUTHORIZED,
                    ..
                }
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_server_message() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Calorie goal is required"}"#,
        );
        assert_eq!(err.server_message(), Some("Calorie goal is required"));
        assert_eq!(
            err.to_string(),
            "Request rejected (400 Bad Request): Calorie goal is required"
        );
    }

    #[test]
    fn test_from_status_without_structured_body() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Request rejected (500 Internal Server Error)");

        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"message":"  "}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::NotLoggedIn.is_unauthorized());
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(!ApiError::from_status(StatusCode::NOT_FOUND, "").is_unauthorized());
        assert!(!ApiError::Network("connection refused".to_string()).is_unauthorized());
    }
}
