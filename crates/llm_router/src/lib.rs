//! llm_router: OpenRouter connector for PromptQuest
//!
//! This library provides:
//! - `LlmConnector`, a stateless call wrapper around the OpenRouter
//!   chat-completions API
//! - A default model and system prompt, both overridable through
//!   `ConnectorConfig`
//! - Typed request/response bodies and a single wrapped error kind
//!
//! # Example
//!
//! ```no_run
//! use llm_router::{ConnectorConfig, LlmConnector};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ConnectorConfig::from_env().with_site_url("https://promptquest.example");
//!     let mut connector = LlmConnector::new(config);
//!
//!     connector.set_system_prompt("Answer like a quest giver.");
//!
//!     match connector.get_answer("Where do I find the key?").await {
//!         Ok(answer) => println!("{}", answer),
//!         Err(e) => eprintln!("request failed: {}", e),
//!     }
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod connector;

// Re-export commonly used types
pub use error::{ConnectorError, Result};

// Config re-exports
pub use config::{
    ConnectorConfig, API_KEY_ENV, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, OPENROUTER_CHAT_URL,
};

// Connector re-exports
pub use connector::{ChatMessage, ChatRequest, ChatResponse, LlmConnector, Role};
