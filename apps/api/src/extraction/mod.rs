//! Text extraction — turns uploaded resume/JD files into clean plain text.
//!
//! Dispatch is by filename extension: PDF via pdf-extract, DOCX by reading the
//! WordprocessingML part out of the ZIP container, TXT as UTF-8 with a Latin-1
//! fallback. All extraction runs on in-memory byte buffers.

use thiserror::Error;

mod docx;
mod pdf;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported format '{0}'. Please upload PDF, DOCX, or TXT.")]
    UnsupportedFormat(String),

    #[error("No text could be extracted from the document")]
    EmptyDocument,

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Extracts clean text from an uploaded file, dispatching on the extension.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let lower = filename.to_lowercase();

    let raw = if lower.ends_with(".pdf") {
        pdf::extract_pdf(bytes)?
    } else if lower.ends_with(".docx") {
        docx::extract_docx(bytes)?
    } else if lower.ends_with(".txt") {
        extract_txt(bytes)
    } else {
        let ext = lower.rsplit('.').next().unwrap_or(&lower).to_string();
        return Err(ExtractionError::UnsupportedFormat(ext));
    };

    let cleaned = clean_text(&raw);
    if cleaned.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }
    Ok(cleaned)
}

/// TXT files: UTF-8, falling back to Latin-1 for legacy exports.
fn extract_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Normalizes extracted text: drops NULs and carriage returns, turns form
/// feeds into newlines, collapses space runs, and collapses 3+ newlines into
/// a single blank line.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut spaces = 0usize;
    let mut newlines = 0usize;

    for c in text.chars() {
        match c {
            '\0' | '\r' => {}
            '\x0c' | '\n' => {
                spaces = 0;
                newlines += 1;
            }
            ' ' | '\t' => {
                spaces += 1;
            }
            _ => {
                if newlines > 0 {
                    if !out.is_empty() {
                        out.push_str(if newlines > 1 { "\n\n" } else { "\n" });
                    }
                    newlines = 0;
                    spaces = 0;
                } else if spaces > 0 {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    spaces = 0;
                }
                out.push(c);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = extract_text("resume.odt", b"whatever").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ext) if ext == "odt"));
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let text = extract_text("RESUME.TXT", b"Rishi Kumar, Data Analyst").unwrap();
        assert_eq!(text, "Rishi Kumar, Data Analyst");
    }

    #[test]
    fn test_empty_txt_is_an_error() {
        let err = extract_text("notes.txt", b"  \n\n  ").unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument));
    }

    #[test]
    fn test_txt_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 and invalid standalone UTF-8.
        let bytes = b"R\xE9sum\xE9 of candidate";
        let text = extract_text("cv.txt", bytes).unwrap();
        assert_eq!(text, "Résumé of candidate");
    }

    #[test]
    fn test_clean_text_collapses_spaces() {
        assert_eq!(clean_text("SQL    and   Python"), "SQL and Python");
    }

    #[test]
    fn test_clean_text_collapses_newline_runs() {
        assert_eq!(clean_text("EXPERIENCE\n\n\n\nABC Corp"), "EXPERIENCE\n\nABC Corp");
        assert_eq!(clean_text("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn test_clean_text_strips_control_chars_and_trims() {
        assert_eq!(clean_text("\n\n  page one\x0cpage two\0  \n"), "page one\npage two");
    }

    #[test]
    fn test_clean_text_drops_trailing_spaces_before_newline() {
        assert_eq!(clean_text("SKILLS   \nSQL"), "SKILLS\nSQL");
    }
}
