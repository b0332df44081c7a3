//! Mock Text Generator for testing.
//!
//! Configurable implementation of the `TextGenerator` port so tests run
//! without a live Ollama host: pre-queued responses, error injection, and
//! call recording for verification.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new().with_response("# Overview\n...");
//! let response = generator.generate(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    GenerationError, GenerationRequest, GenerationResponse, ProviderInfo, TextGenerator,
};

/// A configured mock outcome, consumed in queue order.
#[derive(Debug, Clone)]
enum MockOutcome {
    Success(String),
    Unavailable(String),
    Timeout(u64),
}

/// Mock text generator for tests.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockTextGenerator {
    /// Creates an empty mock. Generating with no queued outcome fails as
    /// unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .expect("mock outcomes poisoned")
            .push_back(MockOutcome::Success(content.into()));
        self
    }

    /// Queues an unavailable error.
    pub fn with_unavailable(self, message: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .expect("mock outcomes poisoned")
            .push_back(MockOutcome::Unavailable(message.into()));
        self
    }

    /// Queues a timeout error.
    pub fn with_timeout(self, timeout_secs: u64) -> Self {
        self.outcomes
            .lock()
            .expect("mock outcomes poisoned")
            .push_back(MockOutcome::Timeout(timeout_secs));
        self
    }

    /// Returns the recorded requests, in call order.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().expect("mock calls poisoned").clone()
    }

    /// Returns how many times `generate` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock calls poisoned").len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        self.calls
            .lock()
            .expect("mock calls poisoned")
            .push(request);

        let outcome = self
            .outcomes
            .lock()
            .expect("mock outcomes poisoned")
            .pop_front();

        match outcome {
            Some(MockOutcome::Success(content)) => Ok(GenerationResponse {
                content,
                model: "mock".to_string(),
            }),
            Some(MockOutcome::Unavailable(message)) => Err(GenerationError::unavailable(message)),
            Some(MockOutcome::Timeout(timeout_secs)) => {
                Err(GenerationError::Timeout { timeout_secs })
            }
            None => Err(GenerationError::unavailable("no mock outcome queued")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock")
    }
}
