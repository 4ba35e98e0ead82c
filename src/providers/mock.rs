/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with a canned translation
 * - `MockProvider::returning(text)` - Always succeeds with a fixed response
 * - `MockProvider::failing()` - Always fails with an error
 *
 * The mock records every passage it is asked to translate so tests can assert
 * which paragraphs reached the provider and which were filtered out.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Succeeds, echoing the input wrapped in a marker
    Working,
    /// Succeeds with a fixed response regardless of input
    Fixed(String),
    /// Always fails with a request error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Every text passed to `translate`, in call order
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock provider that always returns `text`
    pub fn returning(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Handle onto the recorded requests, shared with the provider
    pub fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(text.to_string());

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[translated] {}", text)),
            MockBehavior::Fixed(response) => Ok(response.clone()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider configured to fail".to_string(),
            )),
        }
    }
}
