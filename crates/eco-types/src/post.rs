use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{PostId, UserId};

/// Kind tag of a post.
///
/// The set is open: tags other than the well-known ones are carried
/// verbatim in [`PostKind::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostKind {
    #[default]
    Article,
    Photo,
    Other(String),
}

impl PostKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Photo => "photo",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for PostKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "article" => Self::Article,
            "photo" => Self::Photo,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for PostKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<PostKind> for String {
    fn from(kind: PostKind) -> Self {
        match kind {
            PostKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feed post.
///
/// `comments_count` is a cached counter maintained incrementally by the
/// store as comments are created; it is never recomputed from the comment
/// rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub image_url: Option<String>,
    pub likes: u32,
    pub comments_count: u32,
    pub created_at: DateTime<Utc>,
}
