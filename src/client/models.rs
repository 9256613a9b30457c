use tracing::instrument;

use super::{json, Client};
use crate::{
    error::Result,
    types::{
        ChatRequest, ChatResponse, CreateModelRequest, EmbeddingVector, EmbeddingVectorRequest,
        GenerateRequest, GenerateResponse, ModelActionResult, Modelfile, OllamaModel,
    },
    Session,
};

impl Client {
    /// Models installed on the backend's Ollama instance.
    #[instrument(skip_all)]
    pub async fn list_models(&self, session: &Session) -> Result<Vec<OllamaModel>> {
        json(self.get(session, &["models"])?).await
    }

    /// One-shot, non-streaming text generation.
    #[instrument(skip_all, fields(model = %request.model))]
    pub async fn generate(
        &self,
        session: &Session,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse> {
        json(self.post(session, &["models", "generate"])?.json(request)).await
    }

    /// Creates or replaces a model from a Modelfile.
    #[instrument(skip_all, fields(name = %name))]
    pub async fn create_model(
        &self,
        session: &Session,
        name: &str,
        modelfile: &str,
    ) -> Result<ModelActionResult> {
        let body = CreateModelRequest {
            name: name.to_string(),
            modelfile: modelfile.to_string(),
        };
        json(self.post(session, &["models", "create"])?.json(&body)).await
    }

    /// Returns the Modelfile text, empty if the backend has none.
    #[instrument(skip_all, fields(name = %name))]
    pub async fn get_modelfile(&self, session: &Session, name: &str) -> Result<String> {
        let file: Modelfile = json(self.get(session, &["models", name, "modelfile"])?).await?;
        Ok(file.modelfile)
    }

    #[instrument(skip_all, fields(name = %name))]
    pub async fn delete_model(&self, session: &Session, name: &str) -> Result<ModelActionResult> {
        json(self.delete(session, &["models", name])?).await
    }

    /// Embeds a single text with the given model.
    #[instrument(skip_all, fields(model = %model))]
    pub async fn model_embeddings(
        &self,
        session: &Session,
        model: &str,
        text: &str,
    ) -> Result<EmbeddingVector> {
        let body = EmbeddingVectorRequest {
            model: model.to_string(),
            prompt: text.to_string(),
        };
        json(self.post(session, &["models", "embeddings"])?.json(&body)).await
    }

    /// Generation with stored prompts and tools resolved by the backend.
    #[instrument(skip_all, fields(model = %request.model))]
    pub async fn chat(&self, session: &Session, request: &ChatRequest) -> Result<ChatResponse> {
        json(self.post(session, &["chat", "generate"])?.json(request)).await
    }
}
