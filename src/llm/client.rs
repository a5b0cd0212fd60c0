//! LLM client trait and a scripted mock

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, ToolsiteError};
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Stateless LLM client: each call is independent
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Model name used when a request does not override it
    fn model(&self) -> &str;
}

/// Mock client that replays queued responses and records requests
#[derive(Debug, Default)]
pub struct MockLlmClient {
    responses: Mutex<VecDeque<Result<CompletionResponse>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text response
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(Ok(CompletionResponse::text(content)));
        self
    }

    /// Queue a full response
    pub fn with_completion(self, response: CompletionResponse) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue an error response
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.push(Err(ToolsiteError::Llm(message.into())));
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn push(&self, response: Result<CompletionResponse>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests
            .lock()
            .map_err(|e| ToolsiteError::Llm(e.to_string()))?
            .push(request);

        self.responses
            .lock()
            .map_err(|e| ToolsiteError::Llm(e.to_string()))?
            .pop_front()
            .unwrap_or_else(|| Err(ToolsiteError::Llm("No mock response queued".to_string())))
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
