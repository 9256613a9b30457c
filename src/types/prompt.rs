use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub model: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Untagged prompts come back as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Prompt {
    /// A prompt that hasn't been created yet.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            model: model.into(),
            category: None,
            tags: Vec::new(),
            creator_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromptUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromptFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_tags_decode_as_empty() {
        let p: Prompt = serde_json::from_value(json!({
            "id": "p-1",
            "title": "t",
            "content": "c",
            "model": "llama3",
            "category": null,
            "tags": null
        }))
        .unwrap();
        assert!(p.tags.is_empty());
    }

    #[test]
    fn missing_tags_decode_as_empty() {
        let p: Prompt =
            serde_json::from_value(json!({"title": "t", "content": "c", "model": "llama3"}))
                .unwrap();
        assert!(p.tags.is_empty());
        assert!(p.id.is_none());
    }
}
