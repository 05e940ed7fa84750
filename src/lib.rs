//! PCB Inspect - Main Library
//!
//! PCB Inspect is a small web service for uploading printed circuit board
//! images and reviewing defect-detection results. Detection is mocked: the
//! service returns randomized findings after a simulated processing delay.
//! Access to the detection page and API is gated behind a username/password
//! sign-in backed by bcrypt hashes and signed session tokens.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server runtime
//!   - Configuration, error types, the detection result contract
//!   - Session status and the sign-in state machine
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and server-rendered pages
//!   - User repository, credential verification, session tokens
//!   - Route guard middleware and the mock detection service
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use pcb_inspect::backend::server::init::create_app;
//! use pcb_inspect::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(config);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is shared through `Arc`. The user repository serializes
//! its check-and-insert path behind a single `RwLock` write guard; token
//! verification is pure and needs no shared state.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
