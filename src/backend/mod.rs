//! Backend Module
//!
//! This module contains all server-side code for PCB Inspect: the Axum
//! router, authentication, the route guard, the mock detection service and
//! the server-rendered pages.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── auth/        - User repository, credentials, sessions, auth handlers
//! ├── detection/   - Mock defect detector and the upload handler
//! ├── error/       - BackendError and its HTTP conversion
//! ├── middleware/  - Route guard
//! ├── pages/       - Sign-in, register and detection pages
//! ├── routes/      - Router assembly
//! └── server/      - AppState, config loading, initialization
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` logs the request
//! 2. Public routes (sign-in, register, health, static) run directly
//! 3. Protected routes pass through the route guard first, which verifies
//!    the session token and either redirects (pages), rejects with 401 (API)
//!    or attaches a `SessionUser` to the request

/// Authentication: users, credentials, sessions, handlers
pub mod auth;

/// Mock detection service
pub mod detection;

/// Backend error types
pub mod error;

/// Route guard middleware
pub mod middleware;

/// Server-rendered pages
pub mod pages;

/// Route configuration
pub mod routes;

/// Server state and initialization
pub mod server;
