//! Credential store interface and the in-memory implementation

use shared::{ClientError, Result};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Opaque bearer token
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the `Authorization` header for this credential
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Single-slot credential storage
///
/// Implementations use interior mutability so one store can be shared
/// between clones of the API client.
pub trait CredentialStore: Send + Sync {
    /// Current credential, or `None` when nothing usable is stored or the
    /// backing storage cannot be read
    fn get(&self) -> Option<Credential>;

    /// Store a credential, replacing any previous one
    fn set(&self, credential: Credential) -> Result<()>;

    /// Remove the stored credential. Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;

    /// True iff a non-empty credential is stored
    fn has(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory credential store
///
/// Lives as long as the process. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    slot: Arc<RwLock<Option<Credential>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a credential
    pub fn with_credential(credential: impl Into<Credential>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(credential.into()))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Credential> {
        let slot = self.slot.read().ok()?;
        slot.as_ref().filter(|c| !c.is_empty()).cloned()
    }

    fn set(&self, credential: Credential) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| ClientError::Store("Failed to acquire write lock".to_string()))?;
        *slot = Some(credential);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| ClientError::Store("Failed to acquire write lock".to_string()))?;
        *slot = None;
        Ok(())
    }
}
