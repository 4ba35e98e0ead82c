/*!
 * Provider implementations for translation services.
 *
 * This module contains the client implementations that carry out a single
 * translation request:
 * - Baidu: signed GET requests against the Baidu fanyi API
 * - Mock: configurable in-memory provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation providers.
///
/// A provider translates one passage per call. Providers surface failures as
/// [`ProviderError`]; the fail-open policy (keep the original text) is applied
/// one layer up, in [`crate::translation::TranslationService`].
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate `text` from `source_language` to `target_language`.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;
}

pub mod baidu;
pub mod mock;
