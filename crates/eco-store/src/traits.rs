use eco_types::{Comment, CommentView, NewPost, Post, PostId, PostView, User, UserId};

use crate::error::StoreResult;

/// Read boundary for the community content store.
///
/// Every read returns owned, freshly joined values. Absent rows are
/// `Ok(None)`, never an error.
pub trait ContentReader: Send + Sync {
    /// Every post in store order (newest created first), denormalized.
    fn feed(&self) -> StoreResult<Vec<PostView>>;

    /// A single denormalized post, or `None` if no post has this id.
    fn post_by_id(&self, id: &PostId) -> StoreResult<Option<PostView>>;

    /// Raw comment rows in append order, orphans included.
    fn comments(&self) -> StoreResult<Vec<Comment>>;

    /// All users in seed order.
    fn users(&self) -> StoreResult<Vec<User>>;

    fn user(&self, id: &UserId) -> StoreResult<Option<User>>;

    /// Up to `limit` users ranked by eco score, highest first.
    ///
    /// Ties keep seed order. Default implementation sorts [`users`](Self::users).
    fn leaderboard(&self, limit: usize) -> StoreResult<Vec<User>> {
        let mut users = self.users()?;
        users.sort_by(|a, b| b.eco_score.cmp(&a.eco_score));
        users.truncate(limit);
        Ok(users)
    }
}

/// Write boundary for the community content store.
pub trait ContentWriter: Send + Sync {
    /// Create a post from a draft and place it at the head of the feed.
    ///
    /// The draft is not validated. The new post starts with zero likes and
    /// zero comments. Returns the stored row.
    fn create_post(&self, draft: NewPost) -> StoreResult<Post>;

    /// Append a comment to `post_id` and increment the post's comment counter.
    ///
    /// Returns the comment joined with its author.
    fn create_comment(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        content: &str,
    ) -> StoreResult<CommentView>;
}
