use tracing::instrument;

use super::{empty, json, Client};
use crate::{
    error::Result,
    types::{Page, PageRequest, VectorDatabase, VectorDbFilter, VectorDbType},
    Session,
};

impl Client {
    #[instrument(skip_all, fields(page = page.page, limit = page.limit))]
    pub async fn list_vector_dbs(
        &self,
        session: &Session,
        page: PageRequest,
        filter: &VectorDbFilter,
    ) -> Result<Page<VectorDatabase>> {
        json(self.get(session, &["vector-dbs"])?.query(&page).query(filter)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_vector_db(&self, session: &Session, id: &str) -> Result<VectorDatabase> {
        json(self.get(session, &["vector-dbs", id])?).await
    }

    #[instrument(skip_all, fields(name = %db.name))]
    pub async fn create_vector_db(
        &self,
        session: &Session,
        db: &VectorDatabase,
    ) -> Result<VectorDatabase> {
        json(self.post(session, &["vector-dbs"])?.json(db)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_vector_db(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["vector-dbs", id])?).await
    }

    /// Kinds of vector database the backend supports.
    #[instrument(skip_all)]
    pub async fn vector_db_types(&self, session: &Session) -> Result<Vec<VectorDbType>> {
        json(self.get(session, &["vector-dbs", "types"])?).await
    }
}
