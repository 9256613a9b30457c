//! Typed client for the workshop backend: prompts, tools, documents, vector
//! databases, embeddings, RAG systems and local models.
//!
//! ```no_run
//! use workshop_client::types::{Credentials, PageRequest, PromptFilter};
//! use workshop_client::{Client, ClientConfig, Session};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = Client::new(&config)?;
//! let mut session = Session::from_config(&config).await?;
//!
//! client.login(&mut session, &Credentials::new("admin", "secret")).await?;
//! let prompts = client
//!     .list_prompts(&session, PageRequest::new(0, 20), &PromptFilter::default())
//!     .await?;
//! println!("{} prompts", prompts.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod token_store;
pub mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use session::Session;
pub use state::{AppState, AuthState, Store};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
