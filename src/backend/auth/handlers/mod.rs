//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - Registration (JSON and form)
//! ├── signin.rs   - Sign-in (JSON and form)
//! ├── signout.rs  - Sign-out
//! └── session.rs  - Session status and current user
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`register_form`** - POST /auth/register
//! - **`sign_in`** - POST /api/auth/signin
//! - **`sign_in_form`** - POST /auth/signin
//! - **`sign_out`** - POST /api/auth/signout
//! - **`get_session`** - GET /api/auth/session
//! - **`get_me`** - GET /api/auth/me (guarded)

/// Request and response types
pub mod types;

/// Registration handlers
pub mod register;

/// Sign-in handlers
pub mod signin;

/// Sign-out handler
pub mod signout;

/// Session status handlers
pub mod session;

pub use types::{
    MessageBody, RegisterRequest, RegisterResponse, SessionResponse, SignInRequest,
    SignInResponse, UserResponse,
};

pub use register::{register, register_form};
pub use session::{get_me, get_session};
pub use signin::{sign_in, sign_in_form};
pub use signout::sign_out;
