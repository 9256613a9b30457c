use serde::{Deserialize, Serialize};

/// A locally installed Ollama model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaModel {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub details: Option<ModelDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub parameter_size: Option<String>,
    #[serde(default)]
    pub quantization_level: Option<String>,
}

/// Sampling options forwarded to the model runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stop: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Context returned by a previous generation, to continue a conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
    /// Streaming responses aren't supported by this client.
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            template: None,
            context: None,
            options: None,
            stream: false,
        }
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn context(mut self, context: Vec<i64>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn options(mut self, options: GenerateOptions) -> Self {
        self.options = Some(options);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub response: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub context: Option<Vec<i64>>,
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub load_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

/// Chat generation with optional tool descriptions injected into the system prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub prompt: String,
    /// A literal system prompt, or `prompt:<id>` to use a stored prompt's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub tools: bool,
    #[serde(rename = "selectedTools", skip_serializing_if = "Vec::is_empty")]
    pub selected_tools: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<i64>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            tools: false,
            selected_tools: Vec::new(),
            context: Vec::new(),
        }
    }

    /// Uses the content of a stored prompt as the system prompt.
    pub fn with_stored_prompt(mut self, prompt_id: &str) -> Self {
        self.system = Some(format!("prompt:{prompt_id}"));
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tools = tools.into_iter().map(Into::into).collect();
        self.tools = !self.selected_tools.is_empty();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub context: Vec<i64>,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateModelRequest {
    pub name: String,
    pub modelfile: String,
}

/// Acknowledgement for model create/delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelActionResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Modelfile {
    #[serde(default)]
    pub modelfile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddingVectorRequest {
    pub model: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingVector {
    pub embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_request_never_streams() {
        let req = GenerateRequest::new("llama3", "hi").system("be brief");
        let v = serde_json::to_value(req).unwrap();
        assert_eq!(
            v,
            json!({"model": "llama3", "prompt": "hi", "system": "be brief", "stream": false})
        );
    }

    #[test]
    fn chat_request_uses_backend_field_names() {
        let v = serde_json::to_value(
            ChatRequest::new("llama3", "hi")
                .with_stored_prompt("p1")
                .with_tools(["calculator"]),
        )
        .unwrap();
        assert_eq!(v["system"], "prompt:p1");
        assert_eq!(v["tools"], true);
        assert_eq!(v["selectedTools"], json!(["calculator"]));
        assert!(v.get("context").is_none());
    }

    #[test]
    fn decodes_model_listing() {
        let m: OllamaModel = serde_json::from_value(json!({
            "name": "llama3:latest",
            "model": "llama3:latest",
            "size": 4661224676u64,
            "modified_at": "2024-05-01T10:00:00Z",
            "details": {"family": "llama", "parameter_size": "8.0B", "quantization_level": "Q4_0"}
        }))
        .unwrap();
        assert_eq!(m.details.unwrap().family.as_deref(), Some("llama"));
    }
}
