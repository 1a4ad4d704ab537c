//! JSON encoding of responses and decoding of comment submissions.

use crate::{
    dto::CommentRequest,
    errors::ApiError,
    models::{Comment, Post},
};
use serde::Serialize;

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value)
        .map_err(|e| ApiError::Internal(format!("JSON encoding failed: {}", e)))
}

pub fn encode_posts(posts: &[Post]) -> Result<String, ApiError> {
    encode(posts)
}

pub fn encode_comments(comments: &[Comment]) -> Result<String, ApiError> {
    encode(comments)
}

/// Decodes a raw request body. Anything that is not a JSON object with
/// string (or null) `user`/`text` fields is `InvalidPayload`; emptiness is
/// checked later by the caller.
pub fn decode_comment(body: &[u8]) -> Result<CommentRequest, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidPayload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_use_commentaries_key() {
        let posts = vec![Post::new(1, "hello").with_comment(Comment::new("u", "t"))];
        let json: serde_json::Value = serde_json::from_str(&encode_posts(&posts).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"id": 1, "text": "hello", "commentaries": [{"user": "u", "text": "t"}]}
            ])
        );
    }

    #[test]
    fn test_empty_comment_list_encodes_as_empty_array() {
        assert_eq!(encode_comments(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_comment_accepts_missing_fields() {
        let request = decode_comment(br#"{"user":"A"}"#).unwrap();
        assert_eq!(request.user.as_deref(), Some("A"));
        assert!(request.text.is_none());

        let request = decode_comment(br#"{"user":null,"text":"x","extra":1}"#).unwrap();
        assert!(request.user.is_none());
    }

    #[test]
    fn test_decode_comment_rejects_malformed_bodies() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"{",
            b"not json",
            b"null",
            br#"{"user": 5, "text": "x"}"#,
            b"\xff\xfe",
        ];
        for body in bodies {
            assert_eq!(decode_comment(body).unwrap_err(), ApiError::InvalidPayload);
        }
    }

    #[test]
    fn test_decode_keeps_utf8_text() {
        let request = decode_comment("{\"user\":\"Первый\",\"text\":\"Привет\"}".as_bytes()).unwrap();
        assert_eq!(request.user.as_deref(), Some("Первый"));
    }
}
