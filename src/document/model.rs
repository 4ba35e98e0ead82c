//! In-memory model of a presentation document.
//!
//! The model mirrors the structural hierarchy of a PPTX file: a presentation
//! owns slides, slides own shapes, a shape may carry a text frame, text frames
//! own paragraphs and paragraphs own runs. Run formatting is not lifted into
//! the model; it stays in the slide XML and the codec re-attaches mutated text
//! to the surviving runs on save (see [`super::pptx`]).

use std::path::{Path, PathBuf};

use crate::errors::DocumentError;

/// A contiguous span of text within a paragraph carrying a single style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// Text content of the run
    pub text: String,
}

/// An ordered group of runs forming one block of text within a text frame.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Runs in document order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Concatenation of all run texts in order.
    ///
    /// Before any mutation this equals the paragraph's rendered text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Collapse the paragraph into a single run carrying `translated_text`.
    ///
    /// The first run keeps its formatting (which lives in the slide XML) and
    /// takes the new text; every later run is removed, last to first. A
    /// paragraph without runs has nothing to collapse into and is left alone.
    pub fn collapse_into_first_run(&mut self, translated_text: &str) {
        if self.runs.is_empty() {
            return;
        }

        self.runs[0].text = translated_text.to_string();
        while self.runs.len() > 1 {
            self.runs.pop();
        }
    }
}

/// The text-bearing region of a shape.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

/// A positioned object on a slide. Not all shapes carry text.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    /// Text frame, present only for text-bearing shapes
    pub text_frame: Option<TextFrame>,
}

/// One page of the presentation document.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Archive part this slide was loaded from, e.g. `ppt/slides/slide1.xml`
    pub part_name: String,
    /// Shapes in document order
    pub shapes: Vec<Shape>,
}

/// A presentation opened from a PPTX file, mutated in place and saved back.
#[derive(Debug)]
pub struct Presentation {
    /// Path the presentation was opened from
    source_path: PathBuf,
    /// Original archive bytes, reused verbatim for all non-slide parts on save
    raw: Vec<u8>,
    /// Slides in document order
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Open a presentation from a `.pptx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let raw = std::fs::read(path)?;
        let slides = super::pptx::read_slides(&raw)?;

        Ok(Presentation {
            source_path: path.to_path_buf(),
            raw,
            slides,
        })
    }

    /// Persist the presentation to `output_path`, same format as the input.
    ///
    /// Every part of the original archive is copied through unchanged except
    /// the slide XML parts, which are re-rendered from the mutated model.
    pub fn save<P: AsRef<Path>>(&self, output_path: P) -> Result<(), DocumentError> {
        super::pptx::write_archive(&self.raw, &self.slides, output_path.as_ref())
    }

    /// Path the presentation was opened from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Number of slides in the presentation.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Borrow the paragraph at `address`.
    pub fn paragraph(&self, address: &ParagraphAddress) -> &Paragraph {
        &self.slides[address.slide].shapes[address.shape]
            .text_frame
            .as_ref()
            .expect("walker only addresses shapes with a text frame")
            .paragraphs[address.paragraph]
    }

    /// Mutably borrow the paragraph at `address`.
    pub fn paragraph_mut(&mut self, address: &ParagraphAddress) -> &mut Paragraph {
        &mut self.slides[address.slide].shapes[address.shape]
            .text_frame
            .as_mut()
            .expect("walker only addresses shapes with a text frame")
            .paragraphs[address.paragraph]
    }

    /// Build a presentation directly from slides, for tests that don't need
    /// an archive behind the model.
    #[doc(hidden)]
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Presentation {
            source_path: PathBuf::new(),
            raw: Vec::new(),
            slides,
        }
    }
}

/// Position of a paragraph within the presentation tree.
///
/// All indices are zero-based; the walker pairs each address with the 1-based
/// slide number used for logging and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphAddress {
    /// Slide index
    pub slide: usize,
    /// Shape index within the slide
    pub shape: usize,
    /// Paragraph index within the shape's text frame
    pub paragraph: usize,
}

/// Walker over every paragraph of a presentation in document order.
///
/// Yields `(slide_number, address)` pairs: slides in document order, shapes
/// within a slide in document order, paragraphs within a shape's text frame
/// in document order. Shapes without a text frame are skipped silently. The
/// walk is finite, non-restartable and has no side effects.
pub struct DocumentWalker<'a> {
    presentation: &'a Presentation,
    slide: usize,
    shape: usize,
    paragraph: usize,
}

impl<'a> DocumentWalker<'a> {
    /// Create a walker positioned before the first paragraph.
    pub fn new(presentation: &'a Presentation) -> Self {
        DocumentWalker {
            presentation,
            slide: 0,
            shape: 0,
            paragraph: 0,
        }
    }
}

impl Iterator for DocumentWalker<'_> {
    type Item = (usize, ParagraphAddress);

    fn next(&mut self) -> Option<Self::Item> {
        while self.slide < self.presentation.slides.len() {
            let slide = &self.presentation.slides[self.slide];

            while self.shape < slide.shapes.len() {
                let shape = &slide.shapes[self.shape];
                let Some(text_frame) = &shape.text_frame else {
                    self.shape += 1;
                    self.paragraph = 0;
                    continue;
                };

                if self.paragraph < text_frame.paragraphs.len() {
                    let address = ParagraphAddress {
                        slide: self.slide,
                        shape: self.shape,
                        paragraph: self.paragraph,
                    };
                    self.paragraph += 1;
                    return Some((self.slide + 1, address));
                }

                self.shape += 1;
                self.paragraph = 0;
            }

            self.slide += 1;
            self.shape = 0;
            self.paragraph = 0;
        }

        None
    }
}
