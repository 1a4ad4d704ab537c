use super::parse_post_id;
use crate::{AppState, codec, dto::Outcome, errors::ApiError};
use axum::{body::Body, http::StatusCode};
use tracing::info;

/// GET /posts/{id}/comments
pub fn list_comments(state: &AppState, id_token: &str) -> Result<Outcome, ApiError> {
    let post_id = parse_post_id(id_token)?;

    let comments = state
        .store
        .comments(post_id)
        .ok_or(ApiError::PostNotFound(post_id))?;

    Ok(Outcome::json(
        StatusCode::OK,
        codec::encode_comments(&comments)?,
    ))
}

/// POST /posts/{id}/comments
/// Body: { "user": "...", "text": "..." }
///
/// Checks run in a fixed order: id, then payload syntax, then empty fields,
/// then post existence. The body is not read at all for a bad id.
pub async fn add_comment(
    state: &AppState,
    id_token: &str,
    body: Body,
) -> Result<Outcome, ApiError> {
    let post_id = parse_post_id(id_token)?;

    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|_| ApiError::InvalidPayload)?;

    let comment = codec::decode_comment(&bytes)?
        .into_comment()
        .map_err(|_| ApiError::EmptyCommentFields)?;

    let count = state.store.append_comment(post_id, comment)?;

    info!("Comment added to post {} ({} total)", post_id, count);

    Ok(Outcome::message(StatusCode::CREATED, "comment added"))
}
