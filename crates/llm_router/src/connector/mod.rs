//! Connector for the OpenRouter chat-completions API
//!
//! This module provides:
//! - `client`: the `LlmConnector` call wrapper
//! - `wire`: typed request and response bodies

mod client;
mod wire;

pub use client::LlmConnector;
pub use wire::{ChatMessage, ChatRequest, ChatResponse, Choice, CompletionMessage, Role};
