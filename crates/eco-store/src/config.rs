use serde::{Deserialize, Serialize};

/// How new post and comment identifiers are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// Decimal sequence numbers continuing after the largest numeric id
    /// present when the store was built.
    #[default]
    Sequential,
    /// Time-ordered UUID v7 strings.
    Uuid,
}

/// What `create_comment` does when the parent post does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Fail with `StoreError::PostNotFound` and leave the store untouched.
    #[default]
    Reject,
    /// Store the comment anyway and skip the counter increment.
    Allow,
}

/// Configuration for an [`InMemoryContentStore`](crate::InMemoryContentStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the sample users, posts and comments on construction.
    pub seed: bool,
    pub id_scheme: IdScheme,
    pub orphan_comments: OrphanPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            id_scheme: IdScheme::Sequential,
            orphan_comments: OrphanPolicy::Reject,
        }
    }
}

impl StoreConfig {
    /// An unseeded store with default policies.
    pub fn empty() -> Self {
        Self {
            seed: false,
            ..Default::default()
        }
    }

    pub fn with_orphan_comments(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_comments = policy;
        self
    }

    pub fn with_id_scheme(mut self, scheme: IdScheme) -> Self {
        self.id_scheme = scheme;
        self
    }
}
