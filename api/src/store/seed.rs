use crate::models::{Comment, Post};

pub(super) fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, "Это первый пост.")
            .with_comment(Comment::new("Первый", "Я успел откомментировать первым!")),
        Post::new(22, "Это второй пост."),
        Post::new(333, "Это  последний пост."),
    ]
}
