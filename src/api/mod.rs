//! HTTP API server for the Solace gateway

pub mod analyze;
pub mod entries;
pub mod health;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::db::{DbPool, EntryRepo};
use crate::engine::EmpathyEngine;

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub db: DbPool,
    pub engine: Arc<EmpathyEngine>,
    pub entry_repo: EntryRepo,
}

impl ApiState {
    /// Build the API state from a database pool
    #[must_use]
    pub fn new(db: DbPool) -> Self {
        let entry_repo = EntryRepo::new(db.clone());
        Self {
            db,
            engine: Arc::new(EmpathyEngine::new()),
            entry_repo,
        }
    }
}

/// The HTTP API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
}

impl ApiServer {
    /// Create a new API server
    #[must_use]
    pub fn new(state: Arc<ApiState>, port: u16) -> Self {
        Self { state, port }
    }

    /// Assemble the full router with all endpoints and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        let router = health::router()
            .merge(health::ready_router(self.state.clone()))
            .merge(analyze::router(self.state.clone()))
            .merge(entries::router(self.state.clone()));

        // CORS layer for cross-origin requests from frontends
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}
