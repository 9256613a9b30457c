use tracing::instrument;

use super::{empty, json, Client};
use crate::{
    error::Result,
    types::{
        Embedding, EmbeddingCreate, EmbeddingFilter, EmbeddingModel, EmbeddingTaskResponse, Page,
        PageRequest, TaskStatus,
    },
    Session,
};

impl Client {
    #[instrument(skip_all, fields(page = page.page, limit = page.limit))]
    pub async fn list_embeddings(
        &self,
        session: &Session,
        page: PageRequest,
        filter: &EmbeddingFilter,
    ) -> Result<Page<Embedding>> {
        json(self.get(session, &["embeddings"])?.query(&page).query(filter)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_embedding(&self, session: &Session, id: &str) -> Result<Embedding> {
        json(self.get(session, &["embeddings", id])?).await
    }

    /// Starts an embedding job on the backend.
    ///
    /// Returns immediately; follow the job with [`Client::embedding_task`].
    #[instrument(skip_all, fields(document_id = %request.document_id))]
    pub async fn create_embedding(
        &self,
        session: &Session,
        request: &EmbeddingCreate,
    ) -> Result<EmbeddingTaskResponse> {
        json(self.post(session, &["embeddings"])?.json(request)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_embedding(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["embeddings", id])?).await
    }

    /// A single status query for an embedding job. Does not wait or poll.
    #[instrument(skip_all, fields(task_id = %task_id))]
    pub async fn embedding_task(&self, session: &Session, task_id: &str) -> Result<TaskStatus> {
        json(self.get(session, &["embeddings", "tasks", task_id])?).await
    }

    #[instrument(skip_all)]
    pub async fn embedding_models(&self, session: &Session) -> Result<Vec<EmbeddingModel>> {
        json(self.get(session, &["embeddings", "models"])?).await
    }
}
