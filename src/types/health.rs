use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub api_version: Option<String>,
}

/// Per-component health report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedHealth {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub uptime: Option<f64>,
    #[serde(default)]
    pub checks: Vec<ComponentHealth>,
    /// Milliseconds.
    #[serde(default)]
    pub response_time: Option<f64>,
}

impl DetailedHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub component: String,
    pub status: String,
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}
