//! In-memory post storage.
//!
//! Posts live in a `DashMap` keyed by id. Appending a comment takes the
//! shard's write lock for the duration of a single `Vec::push`, so readers
//! observe either the pre- or post-append comment list, never a partial one.
//! Listing order is the construction order, kept in a separate id vector
//! that never changes after construction (posts are neither created nor
//! deleted at runtime).

mod seed;

use crate::models::{Comment, Post, PostId};
use dashmap::{DashMap, mapref::entry::Entry};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("post with id {0} not found")]
    PostNotFound(PostId),
    #[error("duplicate post id {0}")]
    DuplicatePostId(PostId),
}

#[derive(Debug, Default)]
pub struct PostStore {
    posts: DashMap<PostId, Post>,
    order: Vec<PostId>,
}

impl PostStore {
    /// Builds a store from an initial post collection, preserving its order.
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Result<Self, StoreError> {
        let mut store = Self::default();
        for post in posts {
            match store.posts.entry(post.id) {
                Entry::Occupied(_) => return Err(StoreError::DuplicatePostId(post.id)),
                Entry::Vacant(slot) => {
                    store.order.push(post.id);
                    slot.insert(post);
                }
            }
        }
        Ok(store)
    }

    /// The fixed set of posts the service starts with.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_posts(seed::seed_posts())
    }

    pub fn list_posts(&self) -> Vec<Post> {
        self.order
            .iter()
            .filter_map(|id| self.posts.get(id).map(|post| post.value().clone()))
            .collect()
    }

    pub fn find_post(&self, id: PostId) -> Option<Post> {
        self.posts.get(&id).map(|post| post.value().clone())
    }

    pub fn comments(&self, id: PostId) -> Option<Vec<Comment>> {
        self.posts.get(&id).map(|post| post.comments.clone())
    }

    /// Appends `comment` to the post's comment list and returns the new
    /// comment count. Never creates a post.
    pub fn append_comment(&self, id: PostId, comment: Comment) -> Result<usize, StoreError> {
        let mut post = self
            .posts
            .get_mut(&id)
            .ok_or(StoreError::PostNotFound(id))?;
        post.comments.push(comment);
        debug!(post_id = id, count = post.comments.len(), "comment appended");
        Ok(post.comments.len())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
