use serde::{Deserialize, Serialize};

/// A validated `{user, text}` pair. Only built from a request that passed
/// `CommentRequest::validate`, or by the seeding routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

impl Comment {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}
