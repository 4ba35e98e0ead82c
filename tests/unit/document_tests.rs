/*!
 * Tests for the presentation model, document walker and PPTX codec
 */

use anyhow::Result;
use pptranslate::document::{DocumentWalker, Presentation};

use crate::common;

/// Test that a presentation opens with all slides and paragraphs intact
#[test]
fn test_open_withMultiSlideFile_shouldLoadSlidesInDocumentOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_pptx(
        &temp_dir.path().to_path_buf(),
        "deck.pptx",
        &[
            common::slide_xml(&[&["First slide"]]),
            common::slide_xml(&[&["Second", " slide"], &["Another paragraph"]]),
        ],
    )?;

    let presentation = Presentation::open(&path)?;

    assert_eq!(presentation.slide_count(), 2);
    let texts: Vec<(usize, String)> = DocumentWalker::new(&presentation)
        .map(|(n, addr)| (n, presentation.paragraph(&addr).text()))
        .collect();
    assert_eq!(
        texts,
        vec![
            (1, "First slide".to_string()),
            (2, "Second slide".to_string()),
            (2, "Another paragraph".to_string()),
        ]
    );

    Ok(())
}

/// Test that opening a file that is not a ZIP archive fails
#[test]
fn test_open_withNonArchiveFile_shouldReturnDocumentError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "not_a_deck.pptx",
        "plain text, not a zip",
    )?;

    assert!(Presentation::open(&path).is_err());

    Ok(())
}

/// Test that a collapsed paragraph survives a save/reopen round trip
#[test]
fn test_save_withCollapsedParagraph_shouldPersistSingleRun() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_pptx(
        &dir,
        "deck.pptx",
        &[common::slide_xml(&[&["Hello", " World"]])],
    )?;

    let mut presentation = Presentation::open(&input)?;
    let addresses: Vec<_> = DocumentWalker::new(&presentation).collect();
    assert_eq!(addresses.len(), 1);
    presentation
        .paragraph_mut(&addresses[0].1)
        .collapse_into_first_run("你好世界");

    let output = dir.join("deck_translated.pptx");
    presentation.save(&output)?;

    let reopened = Presentation::open(&output)?;
    let paragraph = reopened.paragraph(&addresses[0].1);
    assert_eq!(paragraph.runs.len(), 1);
    assert_eq!(paragraph.text(), "你好世界");

    Ok(())
}

/// Test that untouched paragraphs come back unchanged after a save
#[test]
fn test_save_withoutMutation_shouldPreserveAllRuns() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_pptx(
        &dir,
        "deck.pptx",
        &[common::slide_xml(&[&["你", "好"]])],
    )?;

    let presentation = Presentation::open(&input)?;
    let output = dir.join("copy.pptx");
    presentation.save(&output)?;

    let reopened = Presentation::open(&output)?;
    let addresses: Vec<_> = DocumentWalker::new(&reopened).collect();
    let paragraph = reopened.paragraph(&addresses[0].1);
    assert_eq!(paragraph.runs.len(), 2);
    assert_eq!(paragraph.text(), "你好");

    Ok(())
}
