//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`guard`** - Session resolution and the route guards for protected pages and APIs

pub mod guard;

pub use guard::{
    require_api_session, require_page_session, resolve_session, GuardDecision, RouteGuard,
};
