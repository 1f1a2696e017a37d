//! In-memory content store for the eco community feed.
//!
//! This crate stands in for the social backend the community screens talk
//! to. It owns three ordered collections (users, posts, comments), seeded
//! with fixed sample rows, and serves denormalized reads over them.
//!
//! # Operations
//!
//! - [`ContentWriter::create_post`] — prepend a post (newest first)
//! - [`ContentWriter::create_comment`] — append a comment and bump the
//!   parent's comment counter
//! - [`ContentReader::feed`] — every post, joined with author and comments
//! - [`ContentReader::post_by_id`] — one joined post, or `None`
//!
//! # Design Rules
//!
//! 1. Each store is an explicit instance; there is no process-wide state.
//! 2. Feed order is insertion order, not timestamp order.
//! 3. Identifiers come from a monotonic per-collection sequence and are never reused.
//! 4. Reads hand out owned copies; nothing outside the store can mutate it.
//! 5. Joins are recomputed on every read, never cached.

pub mod config;
pub mod error;
pub mod join;
pub mod memory;
pub mod seed;
pub mod sequence;
pub mod tables;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{IdScheme, OrphanPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use join::{denormalize_comment, denormalize_post};
pub use memory::InMemoryContentStore;
pub use sequence::IdSequence;
pub use tables::{CommentTable, UserTable};
pub use traits::{ContentReader, ContentWriter};
