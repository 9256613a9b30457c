use tracing::instrument;

use super::{empty, json, Client};
use crate::{
    error::Result,
    types::{
        ChatTool, Page, PageRequest, Tool, ToolFilter, ToolParameters, ToolTestResult, ToolUpdate,
    },
    Session,
};

impl Client {
    #[instrument(skip_all, fields(page = page.page, limit = page.limit))]
    pub async fn list_tools(
        &self,
        session: &Session,
        page: PageRequest,
        filter: &ToolFilter,
    ) -> Result<Page<Tool>> {
        json(self.get(session, &["tools"])?.query(&page).query(filter)).await
    }

    /// Tools in the shape the chat endpoint offers them to a model.
    #[instrument(skip_all)]
    pub async fn list_chat_tools(&self, session: &Session) -> Result<Vec<ChatTool>> {
        json(self.get(session, &["tools", "list"])?).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_tool(&self, session: &Session, id: &str) -> Result<Tool> {
        json(self.get(session, &["tools", id])?).await
    }

    #[instrument(skip_all, fields(name = %tool.name))]
    pub async fn create_tool(&self, session: &Session, tool: &Tool) -> Result<Tool> {
        json(self.post(session, &["tools"])?.json(tool)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn update_tool(
        &self,
        session: &Session,
        id: &str,
        update: &ToolUpdate,
    ) -> Result<Tool> {
        json(self.put(session, &["tools", id])?.json(update)).await
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_tool(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["tools", id])?).await
    }

    /// Runs the tool on the backend with the given parameters as the request body.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn test_tool(
        &self,
        session: &Session,
        id: &str,
        parameters: &ToolParameters,
    ) -> Result<ToolTestResult> {
        json(self.post(session, &["tools", id, "test"])?.json(parameters)).await
    }
}
