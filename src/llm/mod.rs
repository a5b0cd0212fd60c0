//! LLM Client Layer - Anthropic API integration for description generation
//!
//! This module provides:
//! - Message types for LLM communication
//! - LlmClient trait for API abstraction
//! - AnthropicClient implementation
//! - DescriptionGenerator, the only consumer of the client

pub mod anthropic;
pub mod client;
pub mod describe;
pub mod types;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use client::{LlmClient, MockLlmClient};
pub use describe::{DescriptionGenerator, generation_enabled};
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, Usage};
