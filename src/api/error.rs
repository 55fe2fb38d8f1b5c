use crate::models::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be turned into the expected schema.
    Rejected { status: StatusCode, detail: String },
    /// Anything that failed while producing the reply.
    Internal(crate::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            ApiError::Rejected { detail, .. } => {
                tracing::warn!("Rejected request body ({}): {}", status, detail);
                detail
            }
            ApiError::Internal(err) => {
                tracing::error!("Chat request failed: {}", err);
                err.to_string()
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
