//! Row collections with the lookup indexes the join layer needs.

use std::collections::HashMap;

use eco_types::{Comment, PostId, User, UserId};

/// Users in insertion order, indexed by id.
#[derive(Clone, Debug, Default)]
pub struct UserTable {
    rows: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user. A later row with the same id shadows the earlier one
    /// for lookups.
    pub fn insert(&mut self, user: User) {
        self.index.insert(user.id.clone(), self.rows.len());
        self.rows.push(user);
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<User> for UserTable {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut table = Self::new();
        for user in iter {
            table.insert(user);
        }
        table
    }
}

/// Comments in append order, with per-post positions.
#[derive(Clone, Debug, Default)]
pub struct CommentTable {
    rows: Vec<Comment>,
    by_post: HashMap<PostId, Vec<usize>>,
}

impl CommentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, comment: Comment) {
        self.by_post
            .entry(comment.post_id.clone())
            .or_default()
            .push(self.rows.len());
        self.rows.push(comment);
    }

    /// Comments on `post_id`, oldest first.
    pub fn for_post<'a>(&'a self, post_id: &PostId) -> impl Iterator<Item = &'a Comment> + 'a {
        self.by_post
            .get(post_id)
            .into_iter()
            .flatten()
            .map(|&i| &self.rows[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Comment> for CommentTable {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        let mut table = Self::new();
        for comment in iter {
            table.push(comment);
        }
        table
    }
}
