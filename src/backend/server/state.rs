/**
 * Application State Management
 *
 * `AppState` is the central state container passed to every handler. It
 * is cheap to clone: every field is an `Arc` or wraps one.
 *
 * # Contents
 *
 * - `auth` - registration and sign-in, including the user repository and
 *   the session issuer
 * - `detector` - the defect detector behind `POST /api/detect`
 * - `config` - the loaded application configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(auth): State<AuthService>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::AuthService;
use crate::backend::detection::DefectDetector;
use crate::shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    /// Register / sign-in use cases
    pub auth: AuthService,

    /// Defect detector
    ///
    /// Held as a trait object so tests and future engines can swap it.
    pub detector: Arc<dyn DefectDetector>,

    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(auth: AuthService, detector: Arc<dyn DefectDetector>, config: AppConfig) -> Self {
        Self {
            auth,
            detector,
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
