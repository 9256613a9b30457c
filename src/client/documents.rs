use std::path::Path;

use reqwest::{
    multipart::{Form, Part},
    Method,
};
use tracing::instrument;

use super::{empty, json, Client};
use crate::{
    error::{Error, Result},
    types::{Document, DocumentFilter, DocumentUpdate, ExtractedText, Page, PageRequest},
    Session,
};

impl Client {
    #[instrument(skip_all, fields(page = page.page, limit = page.limit))]
    pub async fn list_documents(
        &self,
        session: &Session,
        page: PageRequest,
        filter: &DocumentFilter,
    ) -> Result<Page<Document>> {
        json(self.get(session, &["documents"])?.query(&page).query(filter)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_document(&self, session: &Session, id: &str) -> Result<Document> {
        json(self.get(session, &["documents", id])?).await
    }

    /// Creates a document from inline (base64) content.
    #[instrument(skip_all, fields(title = %document.title))]
    pub async fn create_document(
        &self,
        session: &Session,
        document: &Document,
    ) -> Result<Document> {
        json(self.post(session, &["documents"])?.json(document)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn update_document(
        &self,
        session: &Session,
        id: &str,
        update: &DocumentUpdate,
    ) -> Result<Document> {
        json(self.put(session, &["documents", id])?.json(update)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_document(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["documents", id])?).await
    }

    /// Uploads a file as multipart form data with `file` and `title` fields.
    #[instrument(skip_all, fields(file_name = %file_name, title = %title))]
    pub async fn upload_document(
        &self,
        session: &Session,
        file_name: &str,
        contents: Vec<u8>,
        title: &str,
    ) -> Result<Document> {
        let form = Form::new()
            .part("file", Part::bytes(contents).file_name(file_name.to_string()))
            .text("title", title.to_string());
        let req = self
            .authorized(session, Method::POST, self.url(&["documents", "upload"])?)
            .multipart(form);

        json(req).await
    }

    /// Reads a file from disk and uploads it, see [`Client::upload_document`].
    pub async fn upload_document_file(
        &self,
        session: &Session,
        path: impl AsRef<Path>,
        title: &str,
    ) -> Result<Document> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::new(format!("{} has no usable file name", path.display())))?;
        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| Error::new(format!("failed to read {}: {e}", path.display())))?;

        self.upload_document(session, file_name, contents, title).await
    }

    /// Asks the backend to extract plain text from the stored file.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn extract_document_text(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<ExtractedText> {
        json(self.post(session, &["documents", id, "extract"])?).await
    }
}
