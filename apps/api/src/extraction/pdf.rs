use super::ExtractionError;

/// Extracts text from an in-memory PDF via pdf-extract.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}
