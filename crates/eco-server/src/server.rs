use std::sync::Arc;

use tokio::net::TcpListener;

use eco_store::InMemoryContentStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Community content server. Owns one store for its whole lifetime.
pub struct EcoServer {
    config: ServerConfig,
    store: Arc<InMemoryContentStore>,
}

impl EcoServer {
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryContentStore::new(config.store.clone()));
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryContentStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState {
            store: Arc::clone(&self.store),
            default_leaderboard_limit: self.config.default_leaderboard_limit,
        })
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(addr = %self.config.bind_addr, "eco server listening");
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
