//! HTTP client for the workshop backend API.
//!
//! Every endpoint is one method on [`Client`], split across this module's files by
//! resource. A method sends exactly one request: no retries, caching or deduplication.

use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Method, RequestBuilder, Response, Url,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{Error, Result},
    ClientConfig, Session,
};

mod auth;
mod documents;
mod embeddings;
mod health;
mod models;
mod prompts;
mod rag_systems;
mod tools;
mod vector_dbs;

/// A client for the versioned (`/api/v1`) backend API. Clones are reference counted.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    root: Url,
}

impl Client {
    /// No timeout is configured; the transport default applies.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            root: config.api_root()?,
        })
    }

    pub fn api_root(&self) -> &Url {
        &self.root
    }

    /// Builds `{root}/{segments...}`, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| Error::new(format!("{} cannot be a base url", self.root)))?
            .extend(segments);
        Ok(url)
    }

    /// A request carrying the session's bearer token, if it has one.
    fn authorized(&self, session: &Session, method: Method, url: Url) -> RequestBuilder {
        let req = self.http.request(method, url);
        match session.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// An authorized request declaring a JSON body.
    fn request(
        &self,
        session: &Session,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder> {
        Ok(self
            .authorized(session, method, self.url(segments)?)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json")))
    }

    fn get(&self, session: &Session, segments: &[&str]) -> Result<RequestBuilder> {
        self.request(session, Method::GET, segments)
    }

    fn post(&self, session: &Session, segments: &[&str]) -> Result<RequestBuilder> {
        self.request(session, Method::POST, segments)
    }

    fn put(&self, session: &Session, segments: &[&str]) -> Result<RequestBuilder> {
        self.request(session, Method::PUT, segments)
    }

    fn delete(&self, session: &Session, segments: &[&str]) -> Result<RequestBuilder> {
        self.request(session, Method::DELETE, segments)
    }
}

/// Sends the request and turns any non-success status into an [`Error`].
async fn send(req: RequestBuilder) -> Result<Response> {
    let resp = req.send().await?;
    let status = resp.status();
    debug!(%status, url = %resp.url(), "backend responded");

    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(Error::from_response(status, &body))
}

/// Sends the request and decodes the JSON response body.
async fn json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
    let resp = send(req).await?;
    let status = resp.status();
    let body = resp.bytes().await?;

    serde_json::from_slice(&body)
        .map_err(|e| Error::with_status(format!("failed to decode response body: {e}"), status))
}

/// Sends the request, discarding whatever body comes back.
async fn empty(req: RequestBuilder) -> Result<()> {
    send(req).await.map(drop)
}
