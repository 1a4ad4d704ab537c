use crate::{dto::Outcome, models::PostId, store::StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Every way a request can be rejected. Each variant maps to exactly one
/// status code and message; none of them affect the process or the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no such endpoint")]
    UnknownEndpoint,
    #[error("invalid post identifier")]
    InvalidPostId,
    #[error("invalid payload")]
    InvalidPayload,
    #[error("comment fields must not be empty")]
    EmptyCommentFields,
    #[error("post with id {0} not found")]
    PostNotFound(PostId),
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownEndpoint | ApiError::PostNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidPostId | ApiError::InvalidPayload | ApiError::EmptyCommentFields => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PostNotFound(id) => ApiError::PostNotFound(id),
            // Only raised while building a store, never while serving.
            StoreError::DuplicatePostId(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ApiError> for Outcome {
    fn from(err: ApiError) -> Self {
        match &err {
            ApiError::Internal(msg) => error!("Internal error: {}", msg),
            other => warn!(status = %other.status(), "request rejected: {}", other),
        }
        Outcome::message(err.status(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Outcome::from(self).into_response()
    }
}
