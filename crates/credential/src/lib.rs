//! # ARMOR Credential
//!
//! Storage for the single bearer credential the client sends with every
//! authenticated request.
//!
//! ## Components
//!
//! - `CredentialStore` - The store interface handed to the API client
//! - `MemoryCredentialStore` - Process-lifetime slot
//! - `FileCredentialStore` - Session file that survives between CLI runs

mod file_store;
mod store;

pub use file_store::FileCredentialStore;
pub use store::{Credential, CredentialStore, MemoryCredentialStore};
