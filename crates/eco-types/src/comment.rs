use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{CommentId, PostId, UserId};

/// A comment on a post. Comments within a post are ordered oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
