/*!
 * Tests for the translation-candidate classifier
 */

use pptranslate::language::is_translation_candidate;

/// Test that empty text is never a candidate
#[test]
fn test_is_translation_candidate_withEmptyText_shouldReturnFalse() {
    assert!(!is_translation_candidate(""));
}

/// Test that whitespace-only text is never a candidate
#[test]
fn test_is_translation_candidate_withWhitespaceOnly_shouldReturnFalse() {
    assert!(!is_translation_candidate("   "));
    assert!(!is_translation_candidate(" \t \n "));
}

/// Test that pure English text is a candidate
#[test]
fn test_is_translation_candidate_withEnglishText_shouldReturnTrue() {
    assert!(is_translation_candidate("Hello World"));
    assert!(is_translation_candidate("Quarterly results, Q3 2024"));
}

/// Test that text without any ASCII characters is not a candidate
#[test]
fn test_is_translation_candidate_withNoAsciiCharacters_shouldReturnFalse() {
    assert!(!is_translation_candidate("你好"));
    assert!(!is_translation_candidate("第三季度业绩"));
}

/// Test the strict threshold: a ratio of exactly 0.5 is rejected
#[test]
fn test_is_translation_candidate_withExactHalfRatio_shouldReturnFalse() {
    // 50 ASCII + 50 non-ASCII characters, trimmed length 100
    let text = format!("{}{}", "x".repeat(50), "字".repeat(50));
    assert!(!is_translation_candidate(&text));
}

/// Test the strict threshold: a ratio of 0.51 is accepted
#[test]
fn test_is_translation_candidate_withRatioJustAboveHalf_shouldReturnTrue() {
    // 51 ASCII + 49 non-ASCII characters, trimmed length 100
    let text = format!("{}{}", "x".repeat(51), "字".repeat(49));
    assert!(is_translation_candidate(&text));
}

/// The classifier counts ASCII over the untrimmed text but divides by the
/// trimmed length. The asymmetry is deliberate, documented behavior; this test
/// pins it down so nobody "fixes" it silently.
#[test]
fn test_is_translation_candidate_withPaddedCjkText_shouldExposeAsymmetry() {
    // Unpadded: 1 ASCII / 3 trimmed chars -> 0.33, not a candidate.
    assert!(!is_translation_candidate("a你好"));
    // Padded: the four spaces count into the numerator but not the
    // denominator -> 5 / 3 > 0.5, suddenly a candidate.
    assert!(is_translation_candidate("  a你好  "));
}
