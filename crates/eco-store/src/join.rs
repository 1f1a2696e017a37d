//! Denormalization of posts and comments into read views.
//!
//! Both functions are pure: they clone what they need from the tables and
//! never write back. Dangling user references resolve to `None`.

use eco_types::{Comment, CommentView, Post, PostView};

use crate::tables::{CommentTable, UserTable};

/// Inline the author of `comment`.
pub fn denormalize_comment(comment: &Comment, users: &UserTable) -> CommentView {
    CommentView {
        comment: comment.clone(),
        user: users.get(&comment.user_id).cloned(),
    }
}

/// Inline the author of `post` and its comments (oldest first), each with
/// its own author.
pub fn denormalize_post(post: &Post, users: &UserTable, comments: &CommentTable) -> PostView {
    PostView {
        post: post.clone(),
        user: users.get(&post.user_id).cloned(),
        comments: comments
            .for_post(&post.id)
            .map(|c| denormalize_comment(c, users))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use eco_types::{CommentId, PostId, UserId};

    fn tables() -> (UserTable, CommentTable) {
        (
            seed::users().into_iter().collect(),
            seed::comments().into_iter().collect(),
        )
    }

    #[test]
    fn post_gets_author_and_comments() {
        let (users, comments) = tables();
        let post = &seed::posts()[0];
        let view = denormalize_post(post, &users, &comments);

        assert_eq!(view.post, *post);
        assert_eq!(view.author_name(), "ecowarrior123");
        assert_eq!(view.comments.len(), 2);
        assert_eq!(view.comments[0].author_name(), "greenthumb_sara");
        assert_eq!(view.comments[1].author_name(), "mike_sustainable");
    }

    #[test]
    fn post_without_comments_has_empty_list() {
        let (users, comments) = tables();
        let post = &seed::posts()[4];
        let view = denormalize_post(post, &users, &comments);
        assert!(view.comments.is_empty());
    }

    #[test]
    fn unknown_author_resolves_to_none() {
        let (users, comments) = tables();
        let mut post = seed::posts()[1].clone();
        post.user_id = UserId::from("ghost");
        let view = denormalize_post(&post, &users, &comments);
        assert!(view.user.is_none());
        // Comments are still joined.
        assert_eq!(view.comments.len(), 1);
    }

    #[test]
    fn comment_with_unknown_author() {
        let (users, _) = tables();
        let comment = Comment {
            id: CommentId::from("77"),
            post_id: PostId::from("1"),
            user_id: UserId::from("nobody"),
            content: "hi".into(),
            created_at: chrono::Utc::now(),
        };
        let view = denormalize_comment(&comment, &users);
        assert_eq!(view.comment, comment);
        assert!(view.user.is_none());
    }

    #[test]
    fn repeated_joins_are_identical() {
        let (users, comments) = tables();
        let post = &seed::posts()[0];
        assert_eq!(
            denormalize_post(post, &users, &comments),
            denormalize_post(post, &users, &comments)
        );
    }
}
