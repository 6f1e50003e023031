use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors a handler can answer with.
///
/// Bodies are plain text: the decoder's message for malformed input, a short
/// reason for lookups that found nothing.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Docket not found")]
    DocketNotFound,

    #[error("Logsheet not found")]
    LogsheetNotFound,

    /// A path segment that the route pattern would not have matched.
    #[error("")]
    NoRoute,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::DocketNotFound | Self::LogsheetNotFound | Self::NoRoute => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NoRoute => self.status().into_response(),
            _ => (self.status(), self.to_string()).into_response(),
        }
    }
}
