use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::message::ErrorMessage;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} does not exist or already contains this temperature!")]
    TemperatureRejected(String),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("{0}")]
    BadQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TemperatureRejected(_) | ApiError::InvalidDate(_) | ApiError::BadQuery(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        let body = ErrorMessage {
            success: false,
            status: status.as_u16(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
