//! Helpers shared across all domain modules.

pub mod binary;

pub use binary::{resolve_document_base64, Attachments, BinaryAttachment};

/// Extension used when a file name carries none.
pub const DEFAULT_FILE_EXTENSION: &str = "pdf";

/// Extract the file extension from a file name: the lower-cased segment after
/// the last dot. Names without a usable extension fall back to
/// [`DEFAULT_FILE_EXTENSION`] rather than erroring.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => DEFAULT_FILE_EXTENSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_last_dot_segment_lowercased() {
        assert_eq!(file_extension("contract.pdf"), "pdf");
        assert_eq!(file_extension("Contract.PDF"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("scan.Jpeg"), "jpeg");
    }

    #[test]
    fn test_dotless_names_fall_back_to_default() {
        assert_eq!(file_extension("contract"), DEFAULT_FILE_EXTENSION);
        assert_eq!(file_extension(""), DEFAULT_FILE_EXTENSION);
        assert_eq!(file_extension("trailing."), DEFAULT_FILE_EXTENSION);
    }
}
