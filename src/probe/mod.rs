// src/probe/mod.rs

use crate::message::Message;
use colored::Colorize;
use uuid::Uuid;

/// The outcome of one network step of the probe.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub success: bool,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl StepResult {
    pub fn success(output: &str) -> Self {
        Self {
            success: true,
            output: Some(output.to_string()),
            error: None,
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.to_string()),
        }
    }
}

fn new_conversation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Drives one store-then-retrieve cycle against a memory service and
/// reports pass/fail with diagnostics on stdout.
pub struct Probe {
    pub base_url: String,
    client: reqwest::blocking::Client,
}

impl Probe {
    /// Creates a probe for the given base URL. A trailing slash is stripped;
    /// no other validation happens here — a malformed URL surfaces later as
    /// a transport error.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn memory_url(&self, conversation_id: &str) -> String {
        format!("{}/memory/{}", self.base_url, conversation_id)
    }

    /// Stores one message under a fresh conversation ID, retrieves the
    /// conversation, and checks that the first returned message carries the
    /// content that was sent.
    ///
    /// The retrieve step never starts unless the store step returned HTTP
    /// 200. Only the first retrieved element is checked; the service is
    /// assumed to return the relevant message first.
    pub fn run(&self) -> bool {
        println!("Testing memory server at: {}", self.base_url);

        let conversation_id = new_conversation_id();
        println!("Using conversation ID: {}", conversation_id);

        let message = Message::user("Test message from MCP client");
        let url = self.memory_url(&conversation_id);

        println!("\n=== Step 1: Storing a message ===");
        let stored = self.store(&url, &message);
        if !stored.success {
            if let Some(err) = stored.error {
                println!("{} {}", "❌".red(), err);
            }
            return false;
        }
        println!("{}", "✅ Message stored successfully".green());

        println!("\n=== Step 2: Retrieving messages ===");
        let retrieved = self.retrieve(&url);
        let body = match retrieved {
            StepResult {
                success: true,
                output: Some(body),
                ..
            } => body,
            StepResult { error, .. } => {
                if let Some(err) = error {
                    println!("{} {}", "❌".red(), err);
                }
                return false;
            }
        };

        let messages: Vec<Message> = match serde_json::from_str(&body) {
            Ok(messages) => messages,
            Err(err) => {
                println!("{} Error parsing messages: {err}", "❌".red());
                return false;
            }
        };
        println!("Retrieved {} message(s)", messages.len());
        if let Ok(pretty) = serde_json::to_string_pretty(&messages) {
            println!("Response: {}", pretty);
        }

        match messages.first() {
            None => {
                println!("{}", "❌ No messages were retrieved".red());
                return false;
            }
            Some(first) if first.content != message.content => {
                println!("{}", "❌ Message content does not match".red());
                return false;
            }
            Some(_) => println!("{}", "✅ Message content verified".green()),
        }

        println!("\n{}", "=== Test Completed Successfully ===".green());
        true
    }

    fn store(&self, url: &str, message: &Message) -> StepResult {
        println!("POST {}", url);
        if let Ok(pretty) = serde_json::to_string_pretty(message) {
            println!("Data: {}", pretty);
        }

        match self.client.post(url).json(message).send() {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().unwrap_or_default();
                println!("Status: {}", status.as_u16());
                println!("Response: {}", body);

                if status == reqwest::StatusCode::OK {
                    StepResult::success(&body)
                } else {
                    StepResult::failure(&format!(
                        "Failed to store message (status {})",
                        status.as_u16()
                    ))
                }
            }
            Err(err) => StepResult::failure(&format!("Error storing message: {err}")),
        }
    }

    fn retrieve(&self, url: &str) -> StepResult {
        println!("GET {}", url);

        match self.client.get(url).send() {
            Ok(resp) => {
                let status = resp.status();
                println!("Status: {}", status.as_u16());
                let body = resp.text().unwrap_or_default();

                if status == reqwest::StatusCode::OK {
                    StepResult::success(&body)
                } else {
                    println!("Response: {}", body);
                    StepResult::failure(&format!(
                        "Failed to retrieve messages (status {})",
                        status.as_u16()
                    ))
                }
            }
            Err(err) => StepResult::failure(&format!("Error retrieving messages: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let probe = Probe::new("http://localhost:8000/");
        assert_eq!(probe.base_url, "http://localhost:8000");
    }

    #[test]
    fn memory_url_scopes_by_conversation() {
        let probe = Probe::new("http://localhost:8000");
        assert_eq!(
            probe.memory_url("abc-123"),
            "http://localhost:8000/memory/abc-123"
        );
    }

    #[test]
    fn conversation_ids_are_unique_per_run() {
        assert_ne!(new_conversation_id(), new_conversation_id());
    }

    #[test]
    fn step_result_constructors() {
        let ok = StepResult::success("body");
        assert!(ok.success);
        assert_eq!(ok.output.as_deref(), Some("body"));
        assert!(ok.error.is_none());

        let err = StepResult::failure("boom");
        assert!(!err.success);
        assert!(err.output.is_none());
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
