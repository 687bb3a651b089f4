//! # ARMOR Client
//!
//! Typed client for the ARMOR profile REST API.
//!
//! ```text
//! ApiClient ──> request executor ──> reqwest ──> /api/profiles/...
//!     │                 │
//!     │                 └── reads / clears ──> CredentialStore
//!     └── check_password (bypasses the store)
//! ```

mod api_client;
mod request;

pub use api_client::ApiClient;
pub use request::RequestOptions;
