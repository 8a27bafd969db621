// src/message/mod.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// A single message exchanged with the memory service.
///
/// On retrieval the service only guarantees a `content` field, so `role`
/// and `metadata` fall back to their defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl Message {
    /// Builds a user-role message stamped with the current wall-clock time
    /// (fractional Unix seconds under the `timestamp` metadata key).
    pub fn user(content: &str) -> Self {
        let mut metadata = HashMap::new();
        let timestamp = Utc::now().timestamp_micros() as f64 / 1e6;
        metadata.insert("timestamp".to_string(), json!(timestamp));

        Self {
            role: "user".to_string(),
            content: content.to_string(),
            metadata,
        }
    }
}
