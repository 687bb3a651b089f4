//! FileCredentialStore - Session credential kept in a single file

use shared::Result;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::store::{Credential, CredentialStore};

const SESSION_FILE: &str = "session";

/// Credential store backed by `<dir>/session`
///
/// Lets the CLI keep a login between invocations until `logout` or the
/// server rejects the credential.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store whose session file lives in `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Default session directory (`<cache dir>/armor`)
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("armor"))
    }

    /// Path of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_secret(&self, value: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        // mode() only applies on create; tighten a pre-existing file too
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(value.as_bytes())?;
        file.sync_all()
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<Credential> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                // Tolerate the newline an editor appends, nothing else.
                let value = content
                    .strip_suffix("\r\n")
                    .or_else(|| content.strip_suffix('\n'))
                    .unwrap_or(&content);
                if value.is_empty() {
                    None
                } else {
                    Some(Credential::new(value))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cannot read session file");
                None
            }
        }
    }

    fn set(&self, credential: Credential) -> Result<()> {
        self.write_secret(credential.as_str())?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
