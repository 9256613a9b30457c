//! Durable storage for the session's access token.
//!
//! Only the access token is persisted, under the fixed key [`TOKEN_KEY`]. The
//! refresh token lives in memory for the lifetime of the [`Session`](crate::Session).

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;

/// The storage key (and file name) holding the access token.
pub const TOKEN_KEY: &str = "auth_token";

#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Returns the stored access token, if any.
    async fn load(&self) -> Result<Option<String>>;

    async fn save(&self, token: &str) -> Result<()>;

    /// Removes the stored token. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<()>;
}

/// Keeps the token in `<dir>/auth_token`.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path()).await {
            Ok(token) => {
                let token = token.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", self.path().display())),
        }
    }

    async fn save(&self, token: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        tokio::fs::write(self.path(), token)
            .await
            .with_context(|| format!("failed to write {}", self.path().display()))
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(self.path()).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(e).with_context(|| format!("failed to remove {}", self.path().display()))
            }
            _ => Ok(()),
        }
    }
}

/// A store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self
            .token
            .lock()
            .map_err(|_| anyhow::anyhow!("token store poisoned"))?
            .clone())
    }

    async fn save(&self, token: &str) -> Result<()> {
        *self
            .token
            .lock()
            .map_err(|_| anyhow::anyhow!("token store poisoned"))? = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.token
            .lock()
            .map_err(|_| anyhow::anyhow!("token store poisoned"))?
            .take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[tokio::test]
    async fn file_store_round_trips_and_clears() {
        let temp = TempDir::new("workshop-token").unwrap();
        let store = FileTokenStore::new(temp.path().join("nested"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save("abc.def").await.unwrap();
        assert_eq!(store.path().file_name().unwrap(), TOKEN_KEY);
        assert_eq!(store.load().await.unwrap().as_deref(), Some("abc.def"));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn file_store_ignores_blank_file() {
        let temp = TempDir::new("workshop-token").unwrap();
        std::fs::write(temp.path().join(TOKEN_KEY), "\n").unwrap();
        let store = FileTokenStore::new(temp.path());
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn memory_store() {
        let store = MemoryTokenStore::with_token("t1");
        assert_eq!(store.load().await.unwrap().as_deref(), Some("t1"));
        store.save("t2").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("t2"));
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
