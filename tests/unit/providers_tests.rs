/*!
 * Tests for provider implementations and the fail-open translation service
 */

use pptranslate::providers::baidu::Baidu;
use pptranslate::providers::mock::MockProvider;
use pptranslate::translation::TranslationService;

/// The signature must hash exactly `appid + text + salt + secret`, in that
/// order, and hex-encode the MD5 digest.
#[test]
fn test_build_sign_withFixedSalt_shouldHashConcatenatedFields() {
    let expected = format!("{:x}", md5::compute("wx001Hi40000sk999"));
    assert_eq!(Baidu::build_sign("wx001", "Hi", 40000, "sk999"), expected);

    // Field order matters: swapping text and salt gives a different digest.
    let swapped = format!("{:x}", md5::compute("wx00140000Hisk999"));
    assert_ne!(Baidu::build_sign("wx001", "Hi", 40000, "sk999"), swapped);
}

/// The hex encoding is lowercase and 32 characters, as the API expects
#[test]
fn test_build_sign_withAnyInput_shouldProduceLowercaseHexDigest() {
    let sign = Baidu::build_sign("id", "text", 32768, "key");
    assert_eq!(sign.len(), 32);
    assert!(sign.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

/// Test that a provider failure surfaces the original text, flagged as failed
#[tokio::test]
async fn test_translate_or_original_withFailingProvider_shouldReturnOriginalText() {
    let service = TranslationService::new(Box::new(MockProvider::failing()), "en", "zh");

    let outcome = service.translate_or_original("Hello World").await;

    assert_eq!(outcome.text, "Hello World");
    assert!(!outcome.succeeded);
}

/// Test that a successful call surfaces the provider's translation
#[tokio::test]
async fn test_translate_or_original_withWorkingProvider_shouldReturnTranslation() {
    let service =
        TranslationService::new(Box::new(MockProvider::returning("你好世界")), "en", "zh");

    let outcome = service.translate_or_original("Hello World").await;

    assert_eq!(outcome.text, "你好世界");
    assert!(outcome.succeeded);
}

/// Test that empty and whitespace-only passages never reach the provider
#[tokio::test]
async fn test_translate_or_original_withWhitespaceText_shouldSkipRequest() {
    let provider = MockProvider::working();
    let requests = provider.requests();
    let service = TranslationService::new(Box::new(provider), "en", "zh");

    let blank = service.translate_or_original("").await;
    let spaces = service.translate_or_original("   ").await;

    assert_eq!(blank.text, "");
    assert_eq!(spaces.text, "   ");
    assert!(requests.lock().unwrap().is_empty());
}
