/*!
 * Fail-open translation service.
 *
 * Wraps a provider behind the policy the pipeline relies on: a translation
 * call never fails the job. Any provider error is logged and the original
 * text comes back unchanged, so one bad passage never aborts an otherwise
 * successful run.
 */

use log::warn;

use crate::providers::TranslationProvider;

/// Result of one fail-open translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Translated text, or the original text when the call failed
    pub text: String,
    /// Whether the provider call succeeded. For logging only; failures are
    /// never propagated as errors.
    pub succeeded: bool,
}

/// Translation service that applies the fail-open policy over a provider.
#[derive(Debug)]
pub struct TranslationService {
    /// Provider carrying out the actual requests
    provider: Box<dyn TranslationProvider>,
    /// Source language code
    source_language: String,
    /// Target language code
    target_language: String,
}

impl TranslationService {
    /// Create a service for a fixed language pair.
    pub fn new(
        provider: Box<dyn TranslationProvider>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }

    /// Translate one passage, falling back to the original text on failure.
    ///
    /// Empty or whitespace-only text short-circuits without a request.
    pub async fn translate_or_original(&self, text: &str) -> TranslationOutcome {
        if text.trim().is_empty() {
            return TranslationOutcome {
                text: text.to_string(),
                succeeded: true,
            };
        }

        match self
            .provider
            .translate(text, &self.source_language, &self.target_language)
            .await
        {
            Ok(translated) => TranslationOutcome {
                text: translated,
                succeeded: true,
            },
            Err(e) => {
                warn!("Translation failed, keeping original text: {}", e);
                TranslationOutcome {
                    text: text.to_string(),
                    succeeded: false,
                }
            }
        }
    }

    /// Language pair this service translates, as `(source, target)`.
    pub fn language_pair(&self) -> (&str, &str) {
        (&self.source_language, &self.target_language)
    }
}
