use super::Comment;
use serde::{Deserialize, Serialize};

pub type PostId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub text: String,
    #[serde(rename = "commentaries", default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(id: PostId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            comments: Vec::new(),
        }
    }

    /// Builder-style helper used by the seeding routine.
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }
}
