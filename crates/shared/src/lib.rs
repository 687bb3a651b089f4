//! # ARMOR Shared
//!
//! Wire types, errors and configuration used across the ARMOR client crates.

pub mod error;
pub mod profile;
pub mod section;
pub mod config;

// Re-exports
pub use error::*;
pub use profile::*;
pub use section::*;
pub use config::*;
