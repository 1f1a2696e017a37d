use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, warn};

use eco_types::{
    Comment, CommentId, CommentView, NewPost, Post, PostId, PostView, User, UserId,
};

use crate::config::{OrphanPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::join::{denormalize_comment, denormalize_post};
use crate::seed;
use crate::sequence::IdSequence;
use crate::tables::{CommentTable, UserTable};
use crate::traits::{ContentReader, ContentWriter};

/// In-memory content store for tests, demos, and embedding.
///
/// All three collections live behind a single `RwLock`, so every mutation
/// (id issue, insert, counter bump) is applied by one writer at a time.
/// Data is lost when the store is dropped.
pub struct InMemoryContentStore {
    config: StoreConfig,
    inner: RwLock<StoreState>,
}

struct StoreState {
    users: UserTable,
    posts: VecDeque<Post>,
    comments: CommentTable,
    post_ids: IdSequence,
    comment_ids: IdSequence,
}

impl StoreState {
    fn build(config: &StoreConfig) -> Self {
        let (users, posts, comments) = if config.seed {
            (seed::users(), seed::posts(), seed::comments())
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        let post_ids = IdSequence::starting_after(
            config.id_scheme,
            posts.iter().filter_map(|p| p.id.sequence()),
        );
        let comment_ids = IdSequence::starting_after(
            config.id_scheme,
            comments.iter().filter_map(|c| c.id.sequence()),
        );

        Self {
            users: users.into_iter().collect(),
            posts: posts.into(),
            comments: comments.into_iter().collect(),
            post_ids,
            comment_ids,
        }
    }

    fn find_post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == *id)
    }

    fn view(&self, post: &Post) -> PostView {
        denormalize_post(post, &self.users, &self.comments)
    }
}

impl InMemoryContentStore {
    pub fn new(config: StoreConfig) -> Self {
        let state = StoreState::build(&config);
        Self {
            config,
            inner: RwLock::new(state),
        }
    }

    /// A store loaded with the sample community data and default policies.
    pub fn seeded() -> Self {
        Self::new(StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of posts currently stored.
    pub fn post_count(&self) -> StoreResult<usize> {
        Ok(self.read_state()?.posts.len())
    }

    /// Number of comments currently stored, orphans included.
    pub fn comment_count(&self) -> StoreResult<usize> {
        Ok(self.read_state()?.comments.len())
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ContentReader for InMemoryContentStore {
    fn feed(&self) -> StoreResult<Vec<PostView>> {
        let state = self.read_state()?;
        Ok(state.posts.iter().map(|p| state.view(p)).collect())
    }

    fn post_by_id(&self, id: &PostId) -> StoreResult<Option<PostView>> {
        let state = self.read_state()?;
        Ok(state
            .posts
            .iter()
            .find(|p| p.id == *id)
            .map(|p| state.view(p)))
    }

    fn comments(&self) -> StoreResult<Vec<Comment>> {
        let state = self.read_state()?;
        Ok(state.comments.iter().cloned().collect())
    }

    fn users(&self) -> StoreResult<Vec<User>> {
        let state = self.read_state()?;
        Ok(state.users.iter().cloned().collect())
    }

    fn user(&self, id: &UserId) -> StoreResult<Option<User>> {
        let state = self.read_state()?;
        Ok(state.users.get(id).cloned())
    }
}

impl ContentWriter for InMemoryContentStore {
    fn create_post(&self, draft: NewPost) -> StoreResult<Post> {
        let mut state = self.write_state()?;

        let post = Post {
            id: PostId::new(state.post_ids.next_id()),
            user_id: draft.user_id,
            title: draft.title,
            content: draft.content,
            kind: draft.kind,
            image_url: draft.image_url,
            likes: 0,
            comments_count: 0,
            created_at: Utc::now(),
        };
        state.posts.push_front(post.clone());

        debug!(post = %post.id, user = %post.user_id, kind = %post.kind, "created post");
        Ok(post)
    }

    fn create_comment(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        content: &str,
    ) -> StoreResult<CommentView> {
        let mut state = self.write_state()?;

        if !state.posts.iter().any(|p| p.id == *post_id) {
            match self.config.orphan_comments {
                OrphanPolicy::Reject => {
                    warn!(post = %post_id, "rejected comment on unknown post");
                    return Err(StoreError::PostNotFound(post_id.clone()));
                }
                OrphanPolicy::Allow => {
                    warn!(post = %post_id, "storing orphan comment; counter left unchanged");
                }
            }
        }

        let comment = Comment {
            id: CommentId::new(state.comment_ids.next_id()),
            post_id: post_id.clone(),
            user_id: user_id.clone(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        state.comments.push(comment.clone());

        if let Some(post) = state.find_post_mut(post_id) {
            post.comments_count += 1;
        }

        debug!(comment = %comment.id, post = %post_id, user = %user_id, "created comment");
        Ok(denormalize_comment(&comment, &state.users))
    }
}

impl std::fmt::Debug for InMemoryContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryContentStore");
        s.field("config", &self.config);
        if let Ok(state) = self.inner.read() {
            s.field("users", &state.users.len())
                .field("posts", &state.posts.len())
                .field("comments", &state.comments.len());
        }
        s.finish()
    }
}
