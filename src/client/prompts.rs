use tracing::instrument;

use super::{empty, json, Client};
use crate::{
    error::Result,
    types::{Page, PageRequest, Prompt, PromptFilter, PromptUpdate},
    Session,
};

impl Client {
    #[instrument(skip_all, fields(page = page.page, limit = page.limit))]
    pub async fn list_prompts(
        &self,
        session: &Session,
        page: PageRequest,
        filter: &PromptFilter,
    ) -> Result<Page<Prompt>> {
        json(self.get(session, &["prompts"])?.query(&page).query(filter)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_prompt(&self, session: &Session, id: &str) -> Result<Prompt> {
        json(self.get(session, &["prompts", id])?).await
    }

    #[instrument(skip_all)]
    pub async fn create_prompt(&self, session: &Session, prompt: &Prompt) -> Result<Prompt> {
        json(self.post(session, &["prompts"])?.json(prompt)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn update_prompt(
        &self,
        session: &Session,
        id: &str,
        update: &PromptUpdate,
    ) -> Result<Prompt> {
        json(self.put(session, &["prompts", id])?.json(update)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_prompt(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["prompts", id])?).await
    }
}
