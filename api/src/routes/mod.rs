mod comment;
mod post;
pub mod resolver;

use crate::{AppState, dto::Outcome, errors::ApiError, models::PostId};
use axum::extract::{Request, State};
use resolver::Endpoint;
use tracing::debug;

/// Entry point for every request, installed as the router's fallback.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Outcome {
    let endpoint = Endpoint::resolve(request.uri().path(), request.method());
    debug!(method = %request.method(), path = %request.uri().path(), ?endpoint, "resolved");

    let result = match endpoint {
        Endpoint::ListPosts => post::list_posts(&state),
        Endpoint::ListComments(id) => comment::list_comments(&state, &id),
        Endpoint::AddComment(id) => {
            comment::add_comment(&state, &id, request.into_body()).await
        }
        Endpoint::Unknown => Err(ApiError::UnknownEndpoint),
    };

    result.unwrap_or_else(Outcome::from)
}

/// Standard integer parsing: an optional sign and ASCII digits, no
/// surrounding whitespace.
fn parse_post_id(token: &str) -> Result<PostId, ApiError> {
    token.parse::<PostId>().map_err(|_| ApiError::InvalidPostId)
}
