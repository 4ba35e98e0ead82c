/*!
 * Presentation document handling.
 *
 * This module contains the in-memory model of a presentation and the PPTX
 * codec that reads and writes it:
 *
 * - `model`: Presentation/Slide/Shape/TextFrame/Paragraph/Run tree, the
 *   document walker and the run-collapsing mutation
 * - `pptx`: ZIP + OOXML codec that loads the model and persists it back,
 *   rewriting only run text so all other formatting survives byte-for-byte
 */

// Re-export main types for easier usage
pub use self::model::{
    DocumentWalker, Paragraph, ParagraphAddress, Presentation, Run, Shape, Slide, TextFrame,
};

// Submodules
pub mod model;
pub mod pptx;
