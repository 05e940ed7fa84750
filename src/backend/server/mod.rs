//! Server Module
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Configuration loading and tracing setup
//! - **`init`** - State construction, app creation, shutdown signal
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState
//! ├── config.rs - Configuration loading
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pcb_inspect::backend::server::create_app;
//! use pcb_inspect::shared::AppConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::load()?);
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_state, create_app, create_app_with_state, shutdown_signal};
pub use state::AppState;
