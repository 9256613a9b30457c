use serde::{Deserialize, Serialize};

/// A document's embeddings, stored in a vector database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    #[serde(default)]
    pub id: Option<String>,
    pub document_id: String,
    pub vector_db_id: String,
    pub model: String,
    #[serde(default)]
    pub chunk_size: Option<u32>,
    #[serde(default)]
    pub chunk_overlap: Option<u32>,
    #[serde(default)]
    pub dimensions: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddingCreate {
    pub document_id: String,
    pub vector_db_id: String,
    pub model: String,
    pub chunk_size: u32,
    pub chunk_overlap: u32,
}

impl EmbeddingCreate {
    pub const DEFAULT_CHUNK_SIZE: u32 = 1000;
    pub const DEFAULT_CHUNK_OVERLAP: u32 = 200;

    pub fn new(
        document_id: impl Into<String>,
        vector_db_id: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            vector_db_id: vector_db_id.into(),
            model: model.into(),
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            chunk_overlap: Self::DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Handle for a job started by [`Client::create_embedding`](crate::Client::create_embedding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingTaskResponse {
    pub task_id: String,
    pub embedding_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Pending,
    Running,
    Completed,
    Failed,
    NotFound,
    #[serde(other)]
    Unknown,
}

impl TaskState {
    /// Whether polling again can change the answer.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TaskState::Pending | TaskState::Running)
    }
}

/// What a finished embedding job reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingJobResult {
    pub embedding_id: String,
    pub status: String,
    #[serde(default)]
    pub num_chunks: Option<u64>,
}

/// Snapshot of a backend job. Times are seconds since the epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub status: TaskState,
    #[serde(default)]
    pub result: Option<EmbeddingJobResult>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<f64>,
    #[serde(default)]
    pub started_at: Option<f64>,
    #[serde(default)]
    pub completed_at: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingModel {
    pub name: String,
    pub dimensions: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbeddingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_db_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_finished_task() {
        let task: TaskStatus = serde_json::from_value(json!({
            "task_id": "t-1",
            "status": "completed",
            "created_at": 1714557600.5,
            "started_at": 1714557601.0,
            "completed_at": 1714557603.0,
            "duration": 2.0,
            "result": {"embedding_id": "e-1", "status": "completed", "num_chunks": 12},
            "error": null
        }))
        .unwrap();
        assert_eq!(task.status, TaskState::Completed);
        assert!(task.status.is_terminal());
        assert_eq!(task.result.unwrap().num_chunks, Some(12));
    }

    #[test]
    fn unknown_task_is_not_found() {
        let task: TaskStatus =
            serde_json::from_value(json!({"task_id": "gone", "status": "not_found"})).unwrap();
        assert_eq!(task.status, TaskState::NotFound);
        assert!(task.result.is_none());
    }

    #[test]
    fn unexpected_state_is_tolerated() {
        let task: TaskStatus =
            serde_json::from_value(json!({"task_id": "t", "status": "processing"})).unwrap();
        assert_eq!(task.status, TaskState::Unknown);
    }

    #[test]
    fn create_uses_backend_defaults() {
        let v = serde_json::to_value(EmbeddingCreate::new("d", "v", "nomic-embed-text")).unwrap();
        assert_eq!(v["chunk_size"], 1000);
        assert_eq!(v["chunk_overlap"], 200);
    }
}
