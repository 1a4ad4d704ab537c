use crate::{AppState, codec, dto::Outcome, errors::ApiError};
use axum::http::StatusCode;

/// GET /posts
pub fn list_posts(state: &AppState) -> Result<Outcome, ApiError> {
    let posts = state.store.list_posts();
    Ok(Outcome::json(StatusCode::OK, codec::encode_posts(&posts)?))
}
