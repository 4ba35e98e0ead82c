//! PPTX (OOXML) codec for the presentation model.
//!
//! A `.pptx` file is a ZIP archive of XML parts. Reading builds the model from
//! the slide parts; writing streams each slide's original XML through a
//! reader/writer pair, replacing only the text inside `<a:t>` elements and
//! dropping `<a:r>` runs that were removed from the model. Every other event
//! is copied through untouched, which is what keeps the visual formatting of
//! the document intact. All non-slide parts are copied verbatim.

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use quick_xml::events::{BytesEnd, BytesText, Event};
use quick_xml::{Reader, Writer};
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use super::model::{Paragraph, Run, Shape, Slide, TextFrame};
use crate::errors::DocumentError;

/// Relationships part that lists the slides of the presentation.
const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";

/// Read all slides of a presentation archive, in document order.
pub fn read_slides(raw: &[u8]) -> Result<Vec<Slide>, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(raw))
        .map_err(|e| DocumentError::Archive(e.to_string()))?;

    let part_names = slide_part_names(&mut archive)?;
    let mut slides = Vec::with_capacity(part_names.len());

    for part_name in part_names {
        let content = read_archive_part(&mut archive, &part_name)?;
        slides.push(parse_slide_xml(&content, &part_name)?);
    }

    Ok(slides)
}

/// Write the archive back out, re-rendering slide parts from the model.
pub fn write_archive(
    raw: &[u8],
    slides: &[Slide],
    output_path: &Path,
) -> Result<(), DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(raw))
        .map_err(|e| DocumentError::Archive(e.to_string()))?;

    let slides_by_part: HashMap<&str, &Slide> = slides
        .iter()
        .map(|slide| (slide.part_name.as_str(), slide))
        .collect();

    let out = std::fs::File::create(output_path)?;
    let mut writer = ZipWriter::new(out);

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| DocumentError::Archive(e.to_string()))?;
        let name = entry.name().to_string();
        let file_options = FileOptions::default().compression_method(entry.compression());

        if entry.is_dir() {
            writer
                .add_directory(name, file_options)
                .map_err(|e| DocumentError::Archive(e.to_string()))?;
            continue;
        }

        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        drop(entry);

        let output = if let Some(slide) = slides_by_part.get(name.as_str()) {
            let content = String::from_utf8_lossy(&data).into_owned();
            rewrite_slide_xml(&content, slide)?.into_bytes()
        } else {
            data
        };

        writer
            .start_file(name, file_options)
            .map_err(|e| DocumentError::Archive(e.to_string()))?;
        writer.write_all(&output)?;
    }

    writer
        .finish()
        .map_err(|e| DocumentError::Archive(e.to_string()))?;
    Ok(())
}

/// Resolve the ordered slide part names from the presentation relationships.
fn slide_part_names<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Vec<String>, DocumentError> {
    let content = read_archive_part(archive, PRESENTATION_RELS)?;

    let mut slides: Vec<(String, Option<usize>)> = Vec::new();
    let mut reader = Reader::from_str(&content);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let mut rel_type = String::new();
                let mut target = String::new();
                let mut id = String::new();

                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Type" => rel_type = String::from_utf8_lossy(&attr.value).to_string(),
                        b"Target" => target = String::from_utf8_lossy(&attr.value).to_string(),
                        b"Id" => id = String::from_utf8_lossy(&attr.value).to_string(),
                        _ => {}
                    }
                }

                if rel_type.ends_with("/slide") {
                    let order = extract_part_number(&target).or_else(|| extract_part_number(&id));
                    let full_path = if let Some(stripped) = target.strip_prefix('/') {
                        stripped.to_string()
                    } else {
                        format!("ppt/{}", target)
                    };
                    slides.push((full_path, order));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Xml {
                    part: PRESENTATION_RELS.to_string(),
                    message: e.to_string(),
                });
            }
            _ => {}
        }
    }

    // Relationship order in the rels part is arbitrary; the slide number
    // embedded in the target filename gives the document order.
    slides.sort_by(|a, b| match (a.1, b.1) {
        (Some(na), Some(nb)) => na.cmp(&nb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.0.cmp(&b.0),
    });

    Ok(slides.into_iter().map(|(path, _)| path).collect())
}

/// Read a named part of the archive as a string.
fn read_archive_part<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    part_name: &str,
) -> Result<String, DocumentError> {
    let mut entry = archive
        .by_name(part_name)
        .map_err(|_| DocumentError::MissingPart(part_name.to_string()))?;

    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

/// Parse one slide part into the model.
///
/// Shapes are every `sp` or `pic` element in event order; a `txBody` inside a
/// shape makes it text-bearing. Only `<a:t>` text inside `<a:r>` runs counts
/// as run text, so field codes (`a:fld`) and line breaks (`a:br`) stay out of
/// the model and untouched on save.
fn parse_slide_xml(xml: &str, part_name: &str) -> Result<Slide, DocumentError> {
    let mut reader = Reader::from_str(xml);

    let mut shapes: Vec<Shape> = Vec::new();
    let mut shape_stack: Vec<usize> = Vec::new();
    let mut text_body_shape: Option<usize> = None;
    let mut in_run = false;
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"sp" | b"pic" => {
                    shapes.push(Shape::default());
                    shape_stack.push(shapes.len() - 1);
                }
                b"txBody" => {
                    if let Some(&idx) = shape_stack.last() {
                        shapes[idx].text_frame = Some(TextFrame::default());
                        text_body_shape = Some(idx);
                    }
                }
                b"p" => {
                    if let Some(idx) = text_body_shape {
                        if let Some(frame) = shapes[idx].text_frame.as_mut() {
                            frame.paragraphs.push(Paragraph::default());
                        }
                    }
                }
                b"r" => {
                    if let Some(para) = current_paragraph_mut(&mut shapes, text_body_shape) {
                        para.runs.push(Run::default());
                        in_run = true;
                    }
                }
                b"t" => {
                    if in_run {
                        in_run_text = true;
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_run_text {
                    let text = e.unescape().map_err(|err| DocumentError::Xml {
                        part: part_name.to_string(),
                        message: err.to_string(),
                    })?;
                    if let Some(para) = current_paragraph_mut(&mut shapes, text_body_shape) {
                        if let Some(run) = para.runs.last_mut() {
                            run.text.push_str(&text);
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"r" => in_run = false,
                b"txBody" => text_body_shape = None,
                b"sp" | b"pic" => {
                    shape_stack.pop();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Xml {
                    part: part_name.to_string(),
                    message: e.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(Slide {
        part_name: part_name.to_string(),
        shapes,
    })
}

/// Mutable access to the paragraph currently being parsed.
fn current_paragraph_mut(
    shapes: &mut [Shape],
    text_body_shape: Option<usize>,
) -> Option<&mut Paragraph> {
    let idx = text_body_shape?;
    shapes.get_mut(idx)?.text_frame.as_mut()?.paragraphs.last_mut()
}

/// Stream a slide's original XML into a rewritten copy reflecting the model.
///
/// The traversal mirrors `parse_slide_xml` so shape and paragraph cursors line
/// up with the model that was built from the same bytes. For each `<a:r>`:
/// runs that still exist in the model keep their subtree with the `<a:t>`
/// content swapped for the model text; runs past the model's count were
/// collapsed away and their whole subtree is dropped.
fn rewrite_slide_xml(xml: &str, slide: &Slide) -> Result<String, DocumentError> {
    let xml_error = |e: quick_xml::Error| DocumentError::Xml {
        part: slide.part_name.clone(),
        message: e.to_string(),
    };

    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());

    let mut next_shape = 0usize;
    let mut shape_stack: Vec<usize> = Vec::new();
    let mut text_body_shape: Option<usize> = None;
    let mut paragraph_cursor = 0usize;
    let mut current_para: Option<&Paragraph> = None;
    let mut run_cursor = 0usize;
    let mut replacement: Option<String> = None;
    let mut in_replaced_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                match e.local_name().as_ref() {
                    b"sp" | b"pic" => {
                        shape_stack.push(next_shape);
                        next_shape += 1;
                    }
                    b"txBody" => {
                        text_body_shape = shape_stack.last().copied();
                        paragraph_cursor = 0;
                    }
                    b"p" => {
                        current_para = text_body_shape
                            .and_then(|idx| slide.shapes.get(idx))
                            .and_then(|shape| shape.text_frame.as_ref())
                            .and_then(|frame| frame.paragraphs.get(paragraph_cursor));
                        if text_body_shape.is_some() {
                            paragraph_cursor += 1;
                        }
                        run_cursor = 0;
                    }
                    b"r" => {
                        if let Some(para) = current_para {
                            if run_cursor < para.runs.len() {
                                replacement = Some(para.runs[run_cursor].text.clone());
                                run_cursor += 1;
                            } else {
                                // Run removed by collapsing: drop its subtree.
                                let end = e.to_end().into_owned();
                                reader.read_to_end(end.name()).map_err(xml_error)?;
                                continue;
                            }
                        }
                    }
                    b"t" => {
                        if let Some(text) = replacement.take() {
                            writer.write_event(Event::Start(e.to_owned())).map_err(xml_error)?;
                            writer
                                .write_event(Event::Text(BytesText::new(&text)))
                                .map_err(xml_error)?;
                            in_replaced_text = true;
                            continue;
                        }
                    }
                    _ => {}
                }
                writer.write_event(Event::Start(e.to_owned())).map_err(xml_error)?;
            }
            Ok(Event::Empty(e)) => {
                // An empty <a:t/> expands to carry the replacement text.
                if e.local_name().as_ref() == b"t" {
                    if let Some(text) = replacement.take() {
                        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                        writer.write_event(Event::Start(e.to_owned())).map_err(xml_error)?;
                        writer
                            .write_event(Event::Text(BytesText::new(&text)))
                            .map_err(xml_error)?;
                        writer
                            .write_event(Event::End(BytesEnd::new(name)))
                            .map_err(xml_error)?;
                        continue;
                    }
                }
                writer.write_event(Event::Empty(e.to_owned())).map_err(xml_error)?;
            }
            Ok(Event::Text(e)) => {
                if !in_replaced_text {
                    writer.write_event(Event::Text(e.into_owned())).map_err(xml_error)?;
                }
            }
            Ok(Event::CData(e)) => {
                if !in_replaced_text {
                    writer.write_event(Event::CData(e.into_owned())).map_err(xml_error)?;
                }
            }
            Ok(Event::End(e)) => {
                match e.local_name().as_ref() {
                    b"t" => in_replaced_text = false,
                    b"r" => replacement = None,
                    b"p" => current_para = None,
                    b"txBody" => text_body_shape = None,
                    b"sp" | b"pic" => {
                        shape_stack.pop();
                    }
                    _ => {}
                }
                writer.write_event(Event::End(e.to_owned())).map_err(xml_error)?;
            }
            Ok(Event::Eof) => break,
            Ok(event) => {
                writer.write_event(event.into_owned()).map_err(xml_error)?;
            }
            Err(e) => return Err(xml_error(e)),
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| DocumentError::Xml {
        part: slide.part_name.clone(),
        message: e.to_string(),
    })
}

/// Extract a trailing number from a string like `rId2` or `slides/slide3.xml`.
fn extract_part_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml");
    let digits: String = s
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    digits.parse().ok()
}
