//! Maps a request path and method onto one of the supported operations.
//!
//! Only the *shape* of the path is checked here. The post id segment is
//! carried through as raw text and parsed by the handlers.

use axum::http::Method;

const POSTS: &str = "posts";
const COMMENTS: &str = "comments";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `/posts`
    ListPosts,
    /// `GET /posts/{id}/comments`
    ListComments(String),
    /// `POST /posts/{id}/comments`
    AddComment(String),
    Unknown,
}

impl Endpoint {
    pub fn resolve(path: &str, method: &Method) -> Self {
        // Empty segments are kept, so `/posts/` has three segments.
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["", POSTS] => Endpoint::ListPosts,
            ["", POSTS, id, COMMENTS] => {
                if *method == Method::GET {
                    Endpoint::ListComments((*id).to_string())
                } else if *method == Method::POST {
                    Endpoint::AddComment((*id).to_string())
                } else {
                    Endpoint::Unknown
                }
            }
            _ => Endpoint::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_list_posts() {
        assert_eq!(Endpoint::resolve("/posts", &Method::GET), Endpoint::ListPosts);
    }

    #[test]
    fn test_resolve_comments_by_method() {
        assert_eq!(
            Endpoint::resolve("/posts/22/comments", &Method::GET),
            Endpoint::ListComments("22".into())
        );
        assert_eq!(
            Endpoint::resolve("/posts/22/comments", &Method::POST),
            Endpoint::AddComment("22".into())
        );
        assert_eq!(
            Endpoint::resolve("/posts/22/comments", &Method::DELETE),
            Endpoint::Unknown
        );
    }

    #[test]
    fn test_id_token_is_not_parsed() {
        assert_eq!(
            Endpoint::resolve("/posts/abc/comments", &Method::GET),
            Endpoint::ListComments("abc".into())
        );
        assert_eq!(
            Endpoint::resolve("/posts//comments", &Method::POST),
            Endpoint::AddComment(String::new())
        );
    }

    #[test]
    fn test_unrecognized_shapes_are_unknown() {
        for path in [
            "/",
            "",
            "/other",
            "/posts/",
            "/posts/1",
            "/posts/1/comments/",
            "/posts/1/comments/2",
            "/posts/1/replies",
            "/blog/1/comments",
            "posts",
        ] {
            assert_eq!(
                Endpoint::resolve(path, &Method::GET),
                Endpoint::Unknown,
                "path {path:?}"
            );
        }
    }
}
