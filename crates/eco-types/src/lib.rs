//! Foundation types for the eco community content store.
//!
//! This crate provides the entity, identifier, and view types shared by the
//! store, the HTTP surface, and the CLI. Every other eco crate depends on
//! `eco-types`.
//!
//! # Key Types
//!
//! - [`UserId`], [`PostId`], [`CommentId`] — string identifiers, compared by value
//! - [`User`] — a community member with an eco score
//! - [`Post`] / [`PostKind`] — a feed entry with like and comment counters
//! - [`Comment`] — a reply attached to a post
//! - [`PostView`] / [`CommentView`] — denormalized read shapes with joined users
//! - [`NewPost`] — the draft handed to the mutation API

pub mod comment;
pub mod draft;
pub mod error;
pub mod identity;
pub mod post;
pub mod temporal;
pub mod user;
pub mod view;

pub use comment::Comment;
pub use draft::{validate_comment_body, NewPost};
pub use error::TypeError;
pub use identity::{CommentId, PostId, UserId};
pub use post::{Post, PostKind};
pub use temporal::relative_label;
pub use user::User;
pub use view::{CommentView, PostView};
