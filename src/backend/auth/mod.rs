//! Authentication Module
//!
//! This module handles user registration, sign-in and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - `UserRepository` port and the in-memory store
//! - **`credentials`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`service`** - `AuthService`, the register / sign-in use cases
//! - **`cookies`** - Session cookie encoding and token extraction
//! - **`errors`** - `AuthError`, the tagged result of every use case
//! - **`handlers`** - HTTP handlers for the `/api/auth/*` endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and repository
//! ├── credentials.rs  - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Register / sign-in use cases
//! ├── cookies.rs      - Session cookie helpers
//! ├── errors.rs       - AuthError
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Registration handler
//!     ├── signin.rs   - Sign-in handler
//!     ├── signout.rs  - Sign-out handler
//!     └── session.rs  - Session status and current user handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → uniqueness checked → user stored with a bcrypt hash
//! 2. **Sign in**: username, password → credentials verified → session token issued as a cookie
//! 3. **Protected request**: token verified by the route guard → `SessionUser` attached
//! 4. **Sign out**: session cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (salted, adaptive cost)
//! - Session tokens are HS256 JWTs with a fixed lifetime
//! - Unknown users and wrong passwords produce the same "Invalid credentials" error

/// User data model and repository
pub mod users;

/// Password hashing and verification
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// Register and sign-in use cases
pub mod service;

/// Session cookie helpers
pub mod cookies;

/// Authentication error taxonomy
pub mod errors;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{CredentialError, CredentialVerifier};
pub use errors::AuthError;
pub use service::{AuthService, SignedIn};
pub use sessions::{Claims, IssuedToken, SessionError, SessionIssuer};
pub use users::{
    create_user, ConflictField, InMemoryUserRepository, NewUser, RepositoryError, User,
    UserRepository,
};
