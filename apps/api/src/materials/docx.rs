//! Word (.docx) text extraction.
//!
//! A .docx file is a ZIP archive; the body lives in `word/document.xml`.
//! Paragraph texts are joined with `\n` in document order, empty paragraphs
//! included, so line structure matches what the author sees in Word.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::materials::ExtractError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Extracts paragraph text from an in-memory .docx file.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut document = archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| ExtractError::MissingPart(format!("{DOCUMENT_XML}: {e}")))?;

    let mut xml = String::new();
    document.read_to_string(&mut xml)?;

    Ok(paragraphs(&xml)?.join("\n"))
}

/// Collects the text of every `w:p` element, in the order paragraphs open.
///
/// Text-box paragraphs nest inside their anchor paragraph; each gets its own
/// slot, so the anchor keeps the text on both sides of the box. The
/// `mc:Fallback` copy of an `mc:AlternateContent` block is skipped.
/// `w:tab` and `w:br` inside a paragraph become `\t` and `\n`.
fn paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    // Indices into `paragraphs` of the currently open `w:p` elements.
    let mut open: Vec<usize> = Vec::new();
    let mut fallback_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(_)) if fallback_depth > 0 => fallback_depth += 1,
            Ok(Event::End(_)) if fallback_depth > 0 => fallback_depth -= 1,
            Ok(_) if fallback_depth > 0 => {}
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"mc:Fallback" => fallback_depth = 1,
                b"w:p" => {
                    open.push(paragraphs.len());
                    paragraphs.push(String::new());
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match (e.name().as_ref(), open.last()) {
                (b"w:p", _) => paragraphs.push(String::new()),
                (b"w:tab", Some(&idx)) => paragraphs[idx].push('\t'),
                (b"w:br" | b"w:cr", Some(&idx)) => paragraphs[idx].push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    open.pop();
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                if let Some(&idx) = open.last() {
                    let text = e
                        .unescape()
                        .map_err(|e| ExtractError::Xml(e.to_string()))?;
                    paragraphs[idx].push_str(&text);
                }
            }
            Err(e) => {
                return Err(ExtractError::Xml(format!(
                    "error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
