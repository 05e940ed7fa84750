/**
 * Server Initialization
 *
 * Builds `AppState` from configuration and turns it into the router.
 *
 * # Initialization Process
 *
 * 1. Create the in-memory user repository
 * 2. Build the auth service (bcrypt cost, session issuer) from `[auth]`
 * 3. Build the mock detector from `[detection]`
 * 4. Create the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::{AuthService, InMemoryUserRepository, UserRepository};
use crate::backend::detection::{DefectDetector, MockDetector};
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Build application state with the in-memory user store
pub fn build_state(config: AppConfig) -> AppState {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let auth = AuthService::from_config(&config.auth, users);
    let detector: Arc<dyn DefectDetector> = Arc::new(MockDetector::from_config(&config.detection));

    tracing::info!("User store and detector initialized");

    AppState::new(auth, detector, config)
}

/// Create and configure the Axum application
pub fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing PCB Inspect backend server");
    create_app_with_state(build_state(config))
}

/// Create the application around existing state
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}

/// Resolve on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
