use tracing::instrument;

use super::{json, Client};
use crate::{
    error::Result,
    types::{DetailedHealth, HealthStatus},
    Session,
};

impl Client {
    #[instrument(skip_all)]
    pub async fn health(&self, session: &Session) -> Result<HealthStatus> {
        json(self.get(session, &["health"])?).await
    }

    /// Health of each backend component (database, model runtime).
    #[instrument(skip_all)]
    pub async fn health_detailed(&self, session: &Session) -> Result<DetailedHealth> {
        json(self.get(session, &["health", "detailed"])?).await
    }
}
