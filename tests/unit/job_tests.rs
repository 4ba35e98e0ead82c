/*!
 * Tests for job validation and output path derivation
 */

use std::path::{Path, PathBuf};

use anyhow::Result;
use pptranslate::errors::ValidationError;
use pptranslate::job::{derive_log_path, derive_output_path, JobCredentials, TranslationJob};
use pptranslate::providers::mock::MockProvider;
use pptranslate::translation::TranslationService;

use crate::common;

fn mock_service() -> TranslationService {
    TranslationService::new(Box::new(MockProvider::working()), "en", "zh")
}

/// Test that a blank app ID is rejected before the job starts
#[test]
fn test_with_service_withBlankAppId_shouldRejectWithMissingCredentials() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_pptx(
        &temp_dir.path().to_path_buf(),
        "deck.pptx",
        &[common::slide_xml(&[&["Hello"]])],
    )?;

    let result = TranslationJob::with_service(
        JobCredentials::new("", "sk999"),
        input,
        mock_service(),
    );

    assert!(matches!(result, Err(ValidationError::MissingCredentials)));
    Ok(())
}

/// Test that a whitespace-only secret key is rejected as missing
#[test]
fn test_with_service_withWhitespaceSecretKey_shouldRejectWithMissingCredentials() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_pptx(
        &temp_dir.path().to_path_buf(),
        "deck.pptx",
        &[common::slide_xml(&[&["Hello"]])],
    )?;

    let result = TranslationJob::with_service(
        JobCredentials::new("id", "   "),
        input,
        mock_service(),
    );

    assert!(matches!(result, Err(ValidationError::MissingCredentials)));
    Ok(())
}

/// Test that a nonexistent input file is rejected without opening anything
#[test]
fn test_with_service_withMissingInputFile_shouldRejectWithInputNotFound() {
    let result = TranslationJob::with_service(
        JobCredentials::new("id", "key"),
        PathBuf::from("/no/such/file.pptx"),
        mock_service(),
    );

    match result {
        Err(ValidationError::InputNotFound(path)) => {
            assert_eq!(path, PathBuf::from("/no/such/file.pptx"));
        }
        other => panic!("expected InputNotFound, got {:?}", other.err()),
    }
}

/// Test the translated-document output path derivation
#[test]
fn test_derive_output_path_withPptxInput_shouldAppendTranslatedSuffix() {
    assert_eq!(
        derive_output_path(Path::new("/slides/review.pptx")),
        Path::new("/slides/review_translated.pptx")
    );
    assert_eq!(
        derive_output_path(Path::new("review")),
        Path::new("review_translated")
    );
}

/// Test the audit log output path derivation
#[test]
fn test_derive_log_path_withPptxInput_shouldUseTranslationLogSuffix() {
    assert_eq!(
        derive_log_path(Path::new("/slides/review.pptx")),
        Path::new("/slides/review_translation_log.txt")
    );
}
