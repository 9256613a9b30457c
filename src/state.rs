//! Observable state for a UI layer.
//!
//! Each [`Store`] holds the last value a caller put there, usually the result of a
//! [`Client`](crate::Client) call. Stores never fetch, merge or invalidate anything
//! themselves; they notify subscribers when the value is replaced.

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::{
    Document, Embedding, EmbeddingModel, OllamaModel, Prompt, RagSystem, Tool, User,
    VectorDatabase, VectorDbType,
};

/// A shared, observable value. Clones refer to the same cell.
#[derive(Debug)]
pub struct Store<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx: Arc::new(tx) }
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// A receiver that sees every later replacement.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Reads the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }
}

impl<T: Clone> Store<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

/// Who is signed in, and whether a sign-in is underway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// One store per resource, all starting empty.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: Store<AuthState>,
    pub models: Store<Vec<OllamaModel>>,
    pub prompts: Store<Vec<Prompt>>,
    pub tools: Store<Vec<Tool>>,
    pub documents: Store<Vec<Document>>,
    pub rag_systems: Store<Vec<RagSystem>>,
    pub vector_dbs: Store<Vec<VectorDatabase>>,
    pub embeddings: Store<Vec<Embedding>>,
    pub embedding_models: Store<Vec<EmbeddingModel>>,
    pub vector_db_types: Store<Vec<VectorDbType>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = AppState::new();
        assert_eq!(state.auth.get(), AuthState::default());
        assert!(!state.auth.get().is_authenticated);
        assert!(state.prompts.get().is_empty());
        assert!(state.vector_db_types.get().is_empty());
    }

    #[test]
    fn set_notifies_subscribers() {
        let state = AppState::new();
        let mut rx = state.prompts.subscribe();
        assert!(!rx.has_changed().unwrap());

        state
            .prompts
            .set(vec![Prompt::new("Summarize", "Summarize {text}", "llama3")]);

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update()[0].title, "Summarize");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_the_cell() {
        let state = AppState::new();
        let other = state.clone();
        other.auth.update(|auth| auth.loading = true);
        assert!(state.auth.get().loading);
    }

    #[test]
    fn stores_are_independent() {
        let state = AppState::new();
        let tools = state.tools.subscribe();
        state.auth.set(AuthState::failed("Incorrect username or password"));
        assert!(!tools.has_changed().unwrap());
        assert_eq!(
            state.auth.with(|a| a.error.clone()).as_deref(),
            Some("Incorrect username or password")
        );
    }

    #[tokio::test]
    async fn subscriber_wakes_on_replacement() {
        let store = Store::new(0u32);
        let mut rx = store.subscribe();

        let waiter = tokio::spawn(async move {
            rx.changed().await.unwrap();
            let value = *rx.borrow();
            value
        });
        tokio::task::yield_now().await;
        store.set(7);

        assert_eq!(waiter.await.unwrap(), 7);
    }
}
