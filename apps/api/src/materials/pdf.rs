//! PDF text extraction.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::materials::ExtractError;

/// Extracts the text of every page, in page order, from an in-memory PDF.
///
/// The result is newline terminated so it concatenates cleanly with other
/// material. pdf-extract can panic on malformed content streams; that is reported as an
/// ordinary extraction error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut text = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        .map_err(|_| ExtractError::Pdf("malformed PDF content".to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_a_pdf_error() {
        let err = extract_pdf_text(b"%PDF-not-really").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
