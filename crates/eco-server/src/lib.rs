//! HTTP server for the eco community content store.
//!
//! Exposes the feed, post, comment, user and leaderboard operations as JSON
//! endpoints for the browser screens. Drafts are presence-checked here
//! before they reach the store.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::EcoServer;
