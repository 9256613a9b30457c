use tracing::{debug, warn};

use crate::{
    token_store::{FileTokenStore, MemoryTokenStore, TokenStore},
    types::AuthToken,
    ClientConfig,
};

/// The authenticated context a request is made in.
///
/// Every [`Client`](crate::Client) call borrows the session and reads its token once,
/// at call start. Only login, refresh and logout mutate it, and they need `&mut`.
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Creates a session from whatever token the durable store holds.
    ///
    /// An unreadable store is treated as empty.
    pub async fn restore(store: impl TokenStore) -> Self {
        let access_token = match store.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!("couldn't read stored token, starting signed out: {e:#}");
                None
            }
        };
        debug!(signed_in = access_token.is_some(), "restored session");

        Self {
            access_token,
            refresh_token: None,
            store: Box::new(store),
        }
    }

    /// Restores the session persisted in the configured token directory.
    pub async fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self::restore(FileTokenStore::new(config.token_dir()?)).await)
    }

    /// A session that is never persisted.
    pub fn ephemeral() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            store: Box::new(MemoryTokenStore::default()),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Replaces the current token pair and persists the access token.
    ///
    /// A persistence failure is logged; the in-memory token is updated regardless.
    pub async fn set_token(&mut self, token: &AuthToken) {
        self.access_token = Some(token.access_token.clone());
        if token.refresh_token.is_some() {
            self.refresh_token = token.refresh_token.clone();
        }

        if let Err(e) = self.store.save(&token.access_token).await {
            warn!("couldn't persist access token: {e:#}");
        }
    }

    /// Forgets the token pair, in memory and in the durable store.
    pub async fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;

        if let Err(e) = self.store.clear().await {
            warn!("couldn't clear stored access token: {e:#}");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.access_token.is_some())
            .field("can_refresh", &self.refresh_token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(access: &str, refresh: Option<&str>) -> AuthToken {
        AuthToken {
            access_token: access.into(),
            refresh_token: refresh.map(Into::into),
            token_type: "bearer".into(),
        }
    }

    #[tokio::test]
    async fn restore_reads_durable_token() {
        let session = Session::restore(MemoryTokenStore::with_token("stored")).await;
        assert_eq!(session.access_token(), Some("stored"));
        assert_eq!(session.refresh_token(), None);
    }

    #[tokio::test]
    async fn set_then_clear() {
        let mut session = Session::ephemeral();
        assert!(!session.is_authenticated());

        session.set_token(&token("a1", Some("r1"))).await;
        assert_eq!(session.access_token(), Some("a1"));
        assert_eq!(session.refresh_token(), Some("r1"));

        // a response without a refresh token keeps the previous one
        session.set_token(&token("a2", None)).await;
        assert_eq!(session.access_token(), Some("a2"));
        assert_eq!(session.refresh_token(), Some("r1"));

        session.clear().await;
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
    }

    #[tokio::test]
    async fn token_is_persisted_across_sessions() {
        let temp = tempdir::TempDir::new("workshop-session").unwrap();

        let mut session = Session::restore(FileTokenStore::new(temp.path())).await;
        session.set_token(&token("persisted", Some("r"))).await;

        let restored = Session::restore(FileTokenStore::new(temp.path())).await;
        assert_eq!(restored.access_token(), Some("persisted"));

        session.clear().await;
        let restored = Session::restore(FileTokenStore::new(temp.path())).await;
        assert_eq!(restored.access_token(), None);
    }

    #[test]
    fn debug_hides_tokens() {
        let session = Session::ephemeral();
        let out = format!("{session:?}");
        assert!(out.contains("signed_in: false"));
    }
}
