//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── page_routes.rs  - HTML pages and forms
//! └── api_routes.rs   - JSON API endpoints
//! ```
//!
//! Protected routes are grouped in their own sub-router with the matching
//! guard applied through `route_layer`, then merged in. Unmatched paths
//! never reach a guard.

/// Main router creation
pub mod router;

/// HTML page routes
pub mod page_routes;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
