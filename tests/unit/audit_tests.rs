/*!
 * Tests for the audit log format
 */

use std::fs;

use anyhow::Result;
use pptranslate::audit::AuditLogger;

use crate::common;

/// Test that creating the logger writes the header block
#[test]
fn test_create_withDocumentName_shouldWriteHeaderBlock() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deck_translation_log.txt");

    AuditLogger::create(&path, "deck.pptx")?;

    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "PPT file: deck.pptx");
    assert!(lines[1].starts_with("Translated at: "));
    assert_eq!(lines[2], "=".repeat(50));
    assert_eq!(lines[3], "");

    Ok(())
}

/// Test that records append in order with the expected four-line shape
#[test]
fn test_append_record_withTwoRecords_shouldAppendInOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("log.txt");

    let logger = AuditLogger::create(&path, "deck.pptx")?;
    logger.append_record(1, "Hello World", "你好世界")?;
    logger.append_record(3, "Good bye", "再见")?;

    let content = fs::read_to_string(&path)?;
    assert!(content.ends_with(
        "Slide #1\nHello World\n你好世界\n\nSlide #3\nGood bye\n再见\n\n"
    ));

    Ok(())
}

/// Test that creating a logger truncates a previous run's log
#[test]
fn test_create_withExistingFile_shouldTruncatePreviousLog() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&dir, "log.txt", "stale content from a previous run")?;

    AuditLogger::create(&path, "deck.pptx")?;

    let content = fs::read_to_string(&path)?;
    assert!(!content.contains("stale content"));
    assert!(content.starts_with("PPT file: deck.pptx"));

    Ok(())
}
