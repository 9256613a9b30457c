use serde::{Deserialize, Serialize};

/// A set of documents paired with an embedding model for retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagSystem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub embedding_model: String,
    /// Document ids.
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RagSystem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        embedding_model: impl Into<String>,
        documents: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            embedding_model: embedding_model.into(),
            documents,
            creator_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RagSystemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RagQuery<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub text: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagTestResult {
    pub query: String,
    #[serde(default)]
    pub retrieved_chunks: Vec<RetrievedChunk>,
    pub response: String,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub embedding_model: Option<String>,
}
