//! Application startup and lifecycle management.

use crate::config::DispatchConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{NotificationProvider, OneSignalProvider};
use axum::http::{header, HeaderName};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: DispatchConfig,
    pub provider: Arc<dyn NotificationProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration, dispatching
    /// through OneSignal's REST API.
    pub async fn build(config: DispatchConfig) -> Result<Self, AppError> {
        let provider = Arc::new(OneSignalProvider::new(config.onesignal.clone()));
        Self::build_with_provider(config, provider).await
    }

    /// Build the application with an injected provider. Tests use this to
    /// swap in a mock.
    pub async fn build_with_provider(
        config: DispatchConfig,
        provider: Arc<dyn NotificationProvider>,
    ) -> Result<Self, AppError> {
        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Push dispatch service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { config, provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([
                header::AUTHORIZATION,
                HeaderName::from_static("x-client-info"),
                HeaderName::from_static("apikey"),
                header::CONTENT_TYPE,
            ]);

        let router = Router::new()
            .route(
                "/send-notification",
                post(handlers::send_notification).options(handlers::preflight),
            )
            .route("/health", get(handlers::health_check))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
