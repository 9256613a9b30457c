use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::Url;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Where the backend lives and where the session token is kept.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    /// Directory of the durable token file. `None` means the platform data dir.
    pub token_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .with_context(|| format!("invalid backend url {base_url:?}"))?,
            token_dir: None,
        })
    }

    /// Reads `API_URL` and `WORKSHOP_TOKEN_DIR` from the environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&url)?;
        config.token_dir = std::env::var_os("WORKSHOP_TOKEN_DIR").map(PathBuf::from);
        Ok(config)
    }

    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = Some(dir.into());
        self
    }

    /// The versioned API root, `{base_url}/api/v1`.
    pub fn api_root(&self) -> Result<Url> {
        let mut root = self.base_url.clone();
        root.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("backend url {} cannot be a base", self.base_url))?
            .pop_if_empty()
            .extend(API_PREFIX);
        Ok(root)
    }

    /// Resolved token directory, falling back to `<data_dir>/workshop`.
    pub fn token_dir(&self) -> Result<PathBuf> {
        match &self.token_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("no platform data directory for the token file")?
                .join("workshop")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_appends_version_prefix() {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        assert_eq!(
            config.api_root().unwrap().as_str(),
            "http://localhost:8000/api/v1"
        );
    }

    #[test]
    fn api_root_keeps_mount_path() {
        let config = ClientConfig::new("https://example.com/workshop/").unwrap();
        assert_eq!(
            config.api_root().unwrap().as_str(),
            "https://example.com/workshop/api/v1"
        );
    }

    #[test]
    fn explicit_token_dir_wins() {
        let config = ClientConfig::new(DEFAULT_API_URL)
            .unwrap()
            .with_token_dir("/tmp/tokens");
        assert_eq!(config.token_dir().unwrap(), PathBuf::from("/tmp/tokens"));
    }

    #[test]
    fn rejects_garbage_url() {
        assert!(ClientConfig::new("not a url").is_err());
    }
}
