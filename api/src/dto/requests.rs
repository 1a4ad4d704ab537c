use crate::models::Comment;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Body of `POST /posts/{id}/comments`. Fields are optional at the decoding
/// stage so that a missing field is reported as empty, not as malformed JSON.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    #[validate(required, length(min = 1, message = "user must not be empty"))]
    pub user: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1, message = "text must not be empty"))]
    pub text: Option<String>,
}

impl CommentRequest {
    pub fn into_comment(self) -> Result<Comment, ValidationErrors> {
        self.validate()?;
        Ok(Comment::new(
            self.user.unwrap_or_default(),
            self.text.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user: Option<&str>, text: Option<&str>) -> CommentRequest {
        CommentRequest {
            user: user.map(str::to_string),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_request_becomes_comment() {
        let comment = request(Some("A"), Some("hi")).into_comment().unwrap();
        assert_eq!(comment, Comment::new("A", "hi"));
    }

    #[test]
    fn test_empty_or_missing_fields_are_rejected() {
        assert!(request(Some(""), Some("x")).into_comment().is_err());
        assert!(request(Some("A"), Some("")).into_comment().is_err());
        assert!(request(None, Some("x")).into_comment().is_err());
        assert!(request(Some("A"), None).into_comment().is_err());
        assert!(CommentRequest::default().into_comment().is_err());
    }

    #[test]
    fn test_whitespace_only_fields_are_accepted() {
        assert!(request(Some(" "), Some(" ")).into_comment().is_ok());
    }
}
