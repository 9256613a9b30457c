use serde::{Deserialize, Serialize};

/// A registered vector database connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDatabase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub db_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl VectorDatabase {
    pub fn new(name: impl Into<String>, db_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            db_type: db_type.into(),
            connection_string: None,
            creator_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A kind of vector database the backend can talk to, e.g. `qdrant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDbType {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VectorDbFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,
}
