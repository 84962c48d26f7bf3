use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Catalog tags produced an empty vocabulary")]
    EmptyVocabulary,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Feedback ledger error: {0}")]
    Ledger(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Ledger(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Ledger(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidMood(_) | AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyVocabulary | AppError::Ledger(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ExternalApi(_) | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mood_is_bad_request() {
        let response = AppError::InvalidMood("Elated".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ledger_error_is_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Ledger(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
