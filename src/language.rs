//! Language classification for translation candidates.
//!
//! The pipeline only sends text that looks like English to the translation
//! provider. The heuristic is deliberately crude: a passage is a candidate when
//! more than half of its characters are plain ASCII.

/// Decide whether a passage should be sent for translation.
///
/// The ratio compares the number of ASCII characters in the whole text against
/// the character count of the trimmed text. The asymmetric denominator (trimmed)
/// versus numerator (untrimmed) is intentional and kept as-is; texts padded with
/// whitespace can therefore score above 1.0. The threshold is a strict `> 0.5`,
/// so an exact 50/50 split is not a candidate.
pub fn is_translation_candidate(text: &str) -> bool {
    let total = text.trim().chars().count();
    if total == 0 {
        return false;
    }

    let ascii_count = text.chars().filter(|c| c.is_ascii()).count();
    (ascii_count as f64 / total as f64) > 0.5
}
