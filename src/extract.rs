// src/extract.rs
//! Default text-extraction collaborator: turns an uploaded file into plain
//! text for the engine. PDF goes through `pdf-extract`; everything else is
//! treated as UTF-8 text. Extraction failures are user-recoverable input
//! problems, not server faults.

use thiserror::Error;

use crate::utils::file_extension;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Upload a PDF or plain-text resume.")]
    UnsupportedFormat(String),
    #[error("Could not read text from '{file}': {reason}")]
    Unreadable { file: String, reason: String },
}

impl ExtractError {
    /// Hints surfaced alongside the error in API responses.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ExtractError::UnsupportedFormat(_) => vec![
                "Upload a PDF file (.pdf)".to_string(),
                "Upload a plain-text file (.txt)".to_string(),
            ],
            ExtractError::Unreadable { .. } => vec![
                "Ensure the file contains selectable text, not scanned images".to_string(),
                "Re-export the resume and try again".to_string(),
            ],
        }
    }
}

/// Extract plain text from uploaded file bytes. The filename extension
/// selects the extraction path; files without an extension are treated as
/// plain text.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    match file_extension(file_name).as_deref() {
        Some("pdf") => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ExtractError::Unreadable {
                file: file_name.to_string(),
                reason: e.to_string(),
            }
        }),
        Some("txt") | Some("text") | Some("md") | None => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        Some(other) => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = extract_text("resume.txt", b"John Smith\nEXPERIENCE\n").unwrap();
        assert!(text.contains("John Smith"));
    }

    #[test]
    fn missing_extension_is_treated_as_text() {
        assert!(extract_text("resume", b"hello").is_ok());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = extract_text("resume.docx", b"...").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn invalid_utf8_does_not_fail_text_extraction() {
        let bytes = [0xff, 0xfe, b'h', b'i'];
        assert!(extract_text("resume.txt", &bytes).is_ok());
    }
}
