use tracing::instrument;

use super::{empty, json, Client};
use crate::{
    error::Result,
    types::{Page, PageRequest, RagQuery, RagSystem, RagSystemUpdate, RagTestResult},
    Session,
};

impl Client {
    #[instrument(skip_all, fields(page = page.page, limit = page.limit))]
    pub async fn list_rag_systems(
        &self,
        session: &Session,
        page: PageRequest,
    ) -> Result<Page<RagSystem>> {
        json(self.get(session, &["rag-systems"])?.query(&page)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_rag_system(&self, session: &Session, id: &str) -> Result<RagSystem> {
        json(self.get(session, &["rag-systems", id])?).await
    }

    #[instrument(skip_all, fields(name = %system.name))]
    pub async fn create_rag_system(
        &self,
        session: &Session,
        system: &RagSystem,
    ) -> Result<RagSystem> {
        json(self.post(session, &["rag-systems"])?.json(system)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn update_rag_system(
        &self,
        session: &Session,
        id: &str,
        update: &RagSystemUpdate,
    ) -> Result<RagSystem> {
        json(self.put(session, &["rag-systems", id])?.json(update)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_rag_system(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["rag-systems", id])?).await
    }

    /// Runs a retrieval + generation round trip against the system.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn test_rag_system(
        &self,
        session: &Session,
        id: &str,
        query: &str,
    ) -> Result<RagTestResult> {
        json(
            self.post(session, &["rag-systems", id, "test"])?
                .json(&RagQuery { text: query }),
        )
        .await
    }
}
