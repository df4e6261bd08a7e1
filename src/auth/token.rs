use crate::types::{AppError, Result};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

/// Name under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "authToken";

/// Durable home of the bearer token.
///
/// Written at login and logout only; read before every request.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    fn store(&self, token: &str) -> Result<()>;

    /// Forget the stored token.
    fn clear(&self);
}

/// Token kept in process memory. Used by tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.write() = None;
    }
}

/// Token persisted as a single line in a file, so CLI invocations share a
/// login.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Configuration(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        fs::write(&self.path, token).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to write token to {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove token file {}: {}", self.path.display(), e);
            }
        }
    }
}
