/*!
 * # pptranslate - PPTX presentation translator
 *
 * A Rust library for translating the English text of PowerPoint presentations
 * while preserving the document's visual formatting.
 *
 * ## Features
 *
 * - Walk a presentation's slides, shapes, text frames and paragraphs in
 *   document order
 * - Classify each paragraph with a binary English/non-English heuristic
 * - Translate candidate paragraphs through the Baidu translation API with
 *   signed requests
 * - Replace paragraph text in place, keeping the first run's formatting
 * - Append a plain-text audit log of every translated passage
 * - Report per-slide progress over an event channel
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Presentation model, document walker and PPTX codec
 * - `language`: Translation-candidate classification
 * - `translation`: Fail-open translation service
 * - `audit`: Audit log of translated passages
 * - `job`: Job orchestration, validation and progress events
 * - `providers`: Client implementations for translation providers:
 *   - `providers::baidu`: Baidu fanyi API client with request signing
 *   - `providers::mock`: Configurable mock for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod audit;
pub mod document;
pub mod errors;
pub mod job;
pub mod language;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{DocumentWalker, Paragraph, Presentation};
pub use errors::{AppError, DocumentError, ProviderError, ValidationError};
pub use job::{JobCredentials, JobEvent, TranslationJob};
pub use translation::TranslationService;
