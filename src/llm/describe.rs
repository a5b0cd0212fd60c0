//! Description generation for tools that ship without docs
//!
//! One completion request per tool: the title plus the head of the tool's HTML,
//! asking for a single sentence back.

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::Result;
use crate::llm::anthropic::{API_KEY_ENV, AnthropicClient, AnthropicConfig};
use crate::llm::client::LlmClient;
use crate::llm::types::{CompletionRequest, StopReason};

/// Setting this to `true` disables generation even when a key is present
pub const DRY_RUN_ENV: &str = "LLM_DRY_RUN";

/// Generates one-sentence tool descriptions through an LLM client
pub struct DescriptionGenerator {
    client: Arc<dyn LlmClient>,
    snippet_bytes: usize,
    max_tokens: u32,
}

impl DescriptionGenerator {
    pub fn new(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            snippet_bytes: config.snippet_bytes,
            max_tokens: config.max_tokens,
        }
    }

    /// Build a generator from the process environment.
    ///
    /// Returns None when generation is disabled in config, no API key is set,
    /// or LLM_DRY_RUN is `true`.
    pub fn from_env(config: &LlmConfig) -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok();
        let dry_run = std::env::var(DRY_RUN_ENV).ok();
        if !generation_enabled(config, api_key.as_deref(), dry_run.as_deref()) {
            log::info!("LLM description generation disabled");
            return None;
        }

        match AnthropicClient::new(AnthropicConfig::from(config)) {
            Ok(client) => {
                log::info!("LLM description generation enabled (model: {})", client.model());
                Some(Self::new(Arc::new(client), config))
            }
            Err(e) => {
                log::warn!("Could not create LLM client, descriptions will use the fallback: {}", e);
                None
            }
        }
    }

    /// Ask the model for a description; Ok(None) when it returns nothing usable
    pub async fn describe(&self, title: &str, html: &str) -> Result<Option<String>> {
        let prompt = build_prompt(title, html, self.snippet_bytes);
        let request = CompletionRequest::default()
            .with_user_message(prompt)
            .with_max_tokens(self.max_tokens);

        let response = self.client.complete(request).await?;
        log::debug!(
            "Description for {}: {} input / {} output tokens",
            title,
            response.usage.input_tokens,
            response.usage.output_tokens
        );
        if response.stop_reason == StopReason::MaxTokens {
            log::warn!("Description for {} hit the {} token limit and may be cut off", title, self.max_tokens);
        }

        let description = response.content.trim();
        if description.is_empty() {
            Ok(None)
        } else {
            Ok(Some(description.to_string()))
        }
    }
}

impl std::fmt::Debug for DescriptionGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionGenerator")
            .field("model", &self.client.model())
            .field("snippet_bytes", &self.snippet_bytes)
            .finish()
    }
}

/// Decide whether generation should run for the given environment values
pub fn generation_enabled(config: &LlmConfig, api_key: Option<&str>, dry_run: Option<&str>) -> bool {
    if !config.enabled {
        return false;
    }
    if dry_run.is_some_and(|v| v.trim().eq_ignore_ascii_case("true")) {
        return false;
    }
    api_key.is_some_and(|k| !k.trim().is_empty())
}

/// Prompt sent for a single tool
pub fn build_prompt(title: &str, html: &str, snippet_bytes: usize) -> String {
    format!(
        "Generate a concise 1-sentence description for this web tool.\n\n\
         Title: {}\n\
         HTML snippet:\n{}\n\n\
         Return ONLY the description, no preamble.",
        title,
        truncate_at_char_boundary(html, snippet_bytes)
    )
}

/// Longest prefix of `s` no longer than `max` bytes that ends on a char boundary
pub fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
