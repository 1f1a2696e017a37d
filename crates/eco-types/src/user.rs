use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::UserId;

/// A community member.
///
/// Users are created with the store's seed data and are never updated or
/// deleted by the content store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub avatar_url: String,
    pub bio: String,
    /// Accumulated eco points, used to rank the community leaderboard.
    pub eco_score: i64,
    pub location: String,
    pub created_at: DateTime<Utc>,
}
