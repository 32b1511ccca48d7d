//! Request and response bodies for the chat-completions endpoint
//!
//! Only the fields the connector reads are modeled; everything else in the
//! provider's response is ignored during decoding.

use serde::{Deserialize, Serialize};

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged message in the request payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body sent to the endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Decoded response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<CompletionMessage>,
}

/// The model-generated message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text content of the first completion, if the response carries one
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message?.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_lowercase_roles() {
        let request = ChatRequest {
            model: "anthropic/claude-3.5-sonnet".to_string(),
            messages: vec![ChatMessage::system("guide"), ChatMessage::user("hello")],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_response_first_content() {
        let body = json!({
            "id": "gen-1",
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        });

        let response: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.first_content().as_deref(), Some("first"));
    }

    #[test]
    fn test_response_without_choices_decodes() {
        let response: ChatResponse = serde_json::from_value(json!({"id": "gen-1"})).unwrap();
        assert!(response.first_content().is_none());
    }

    #[test]
    fn test_response_without_content_decodes() {
        let body = json!({"choices": [{"message": {"role": "assistant"}}]});
        let response: ChatResponse = serde_json::from_value(body).unwrap();
        assert!(response.first_content().is_none());
    }
}
