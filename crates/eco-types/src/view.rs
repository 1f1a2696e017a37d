//! Denormalized read shapes.
//!
//! Views are owned copies: mutating a view never affects the store that
//! produced it. A `None` user means the referenced member does not exist and
//! should be rendered as anonymous.

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::post::Post;
use crate::user::User;

/// A comment with its author inlined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: Option<User>,
}

/// A post with its author and its comments (each with their author) inlined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub user: Option<User>,
    pub comments: Vec<CommentView>,
}

impl PostView {
    /// Display name of the author, or `"anonymous"` when unresolved.
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("anonymous")
    }
}

impl CommentView {
    /// Display name of the author, or `"anonymous"` when unresolved.
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("anonymous")
    }
}
