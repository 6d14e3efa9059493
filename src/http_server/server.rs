//! HTTP server
//!
//! Combines the bowler, diagnostic, and health routers into one axum
//! server with CORS configured from the service config.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::observability::Logger;
use crate::store::StoreHandle;

use super::bowler_routes::{bowler_routes, ApiState};
use super::diagnostic_routes::{diagnostic_routes, health_routes};

/// HTTP server for the league API
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from configuration
    pub fn with_config(config: Config) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &Config) -> Router {
        let state = Arc::new(ApiState::new(StoreHandle::new(&config.database_path)));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Roster endpoints under /api
            .nest("/api", bowler_routes(state.clone()))
            // Store probe under /api
            .nest("/api", diagnostic_routes(state))
            // Apply CORS middleware
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info(
            "server_start",
            &[
                ("addr", &addr.to_string()),
                ("database", &self.config.database_path.display().to_string()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
