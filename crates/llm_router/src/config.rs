//! Configuration for the OpenRouter connector

use serde::{Deserialize, Serialize};

/// Instruction message prepended to every request unless replaced.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an assistant and always answer in the user's language. Be concise in your answers.";

/// OpenRouter chat-completions endpoint.
pub const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model requested through OpenRouter.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Configuration for the connector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Bearer token for the routing service. Not validated; an empty key
    /// makes the remote call fail with an authorization error.
    pub api_key: String,
    /// Sent as the `HTTP-Referer` attribution header, may be empty.
    pub site_url: String,
    /// Sent as the `X-Title` attribution header.
    pub app_name: String,
    /// Current system prompt. Empty string suppresses the system message.
    pub system_prompt: String,
    /// Chat-completions endpoint URL.
    pub base_url: String,
    /// Model identifier passed in the request body.
    pub model: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            site_url: String::new(),
            app_name: "PromptQuest".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            base_url: OPENROUTER_CHAT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ConnectorConfig {
    /// Create a config with the given API key and defaults for everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read the API key from `OPENROUTER_API_KEY`. A missing variable is not
    /// an error here; the empty key simply fails remotely at call time.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Set the referer attribution URL
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Set the application name used for attribution
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Set the endpoint URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ConnectorConfig::default();
        assert_eq!(config.api_key, "");
        assert_eq!(config.site_url, "");
        assert_eq!(config.app_name, "PromptQuest");
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.base_url, OPENROUTER_CHAT_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_config_builder() {
        let config = ConnectorConfig::new("sk-test")
            .with_site_url("https://promptquest.example")
            .with_app_name("QuestForge")
            .with_system_prompt("Be terse.")
            .with_base_url("http://localhost:9000/v1/chat/completions")
            .with_model("anthropic/claude-3.5-haiku");

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.site_url, "https://promptquest.example");
        assert_eq!(config.app_name, "QuestForge");
        assert_eq!(config.system_prompt, "Be terse.");
        assert_eq!(config.base_url, "http://localhost:9000/v1/chat/completions");
        assert_eq!(config.model, "anthropic/claude-3.5-haiku");
    }
}
