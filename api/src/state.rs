use crate::{config::Config, store::PostStore};
use std::sync::Arc;

/// Shared handle passed to every request. Cloning is cheap: the store sits
/// behind an `Arc` and is never replaced after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<PostStore>, config: &Config) -> Self {
        Self {
            store,
            max_body_bytes: config.max_body_bytes,
        }
    }
}
