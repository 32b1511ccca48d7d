//! Connector client for the OpenRouter chat-completions API

use tracing::debug;

use crate::config::ConnectorConfig;
use crate::connector::wire::{ChatMessage, ChatRequest, ChatResponse};
use crate::error::{ConnectorError, Result};

/// Connector mediating calls to the remote chat-completion service.
///
/// Holds the credentials and the current system prompt; every call is an
/// independent build payload → send → decode round trip. No history is kept
/// between calls.
pub struct LlmConnector {
    config: ConnectorConfig,
    http: reqwest::Client,
}

impl LlmConnector {
    /// Create a new connector from config
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a connector configured from the process environment
    pub fn from_env() -> Self {
        Self::new(ConnectorConfig::from_env())
    }

    /// Get the connector config
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Replace the stored system prompt. Setting it to the empty string
    /// suppresses the system message on the next call.
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.config.system_prompt = prompt.into();
    }

    /// Obtain an answer from the model for a given prompt.
    ///
    /// Returns the text content of the first completion choice. Transport
    /// failures, non-success statuses, and responses missing the expected
    /// fields all surface as [`ConnectorError::Remote`].
    pub async fn get_answer(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: self.build_messages(prompt),
        };

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat-completion request"
        );

        let response = self
            .http
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.app_name)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatResponse = response.json().await?;

        body.first_content().ok_or_else(|| {
            ConnectorError::Remote("response is missing choices[0].message.content".to_string())
        })
    }

    /// Build the request payload: system message first when a system prompt
    /// is set, then the user message.
    fn build_messages(&self, prompt: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);

        if !self.config.system_prompt.is_empty() {
            messages.push(ChatMessage::system(&self.config.system_prompt));
        }
        messages.push(ChatMessage::user(prompt));

        messages
    }
}
