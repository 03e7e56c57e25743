// src/utils.rs
use std::path::Path;

/// Get file extension in lowercase.
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Reduce a client-supplied filename to its final component so uploaded
/// names can be echoed back safely.
pub fn display_file_name(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();
    if name.is_empty() {
        "resume".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("test.pdf"), Some("pdf".to_string()));
        assert_eq!(file_extension("document.TXT"), Some("txt".to_string()));
        assert_eq!(file_extension("noext"), None);
    }

    #[test]
    fn test_display_file_name() {
        assert_eq!(display_file_name("cv.pdf"), "cv.pdf");
        assert_eq!(display_file_name("/tmp/uploads/cv.pdf"), "cv.pdf");
        assert_eq!(display_file_name("C:\\Users\\me\\cv.pdf"), "cv.pdf");
        assert_eq!(display_file_name("  "), "resume");
    }
}
