//! DOCX extraction — a .docx file is a ZIP container; the document body lives
//! in `word/document.xml` as WordprocessingML. Text runs are `<w:t>` elements,
//! paragraphs `<w:p>`, explicit tabs/breaks `<w:tab/>`/`<w:br/>`. Table cells
//! contain their own paragraphs, so tables flatten to one line per cell.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::InvalidDocument(format!("not a DOCX container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| {
            ExtractionError::InvalidDocument(format!("missing {DOCUMENT_PART} part"))
        })?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::InvalidDocument(format!("unreadable document part: {e}")))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let decoded = t
                    .decode()
                    .map_err(|e| ExtractionError::InvalidDocument(format!("bad XML text: {e}")))?;
                let run = quick_xml::escape::unescape(&decoded)
                    .map_err(|e| ExtractionError::InvalidDocument(format!("bad XML text: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::GeneralRef(r)) if in_text_run => {
                let name = r
                    .decode()
                    .map_err(|e| ExtractionError::InvalidDocument(format!("bad XML text: {e}")))?;
                let entity = format!("&{name};");
                let resolved = quick_xml::escape::unescape(&entity)
                    .map_err(|e| ExtractionError::InvalidDocument(format!("bad XML text: {e}")))?;
                text.push_str(&resolved);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::InvalidDocument(format!(
                    "malformed document XML: {e}"
                )))
            }
        }
    }

    Ok(text)
}
