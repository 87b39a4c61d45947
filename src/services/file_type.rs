use crate::models::UploadedFile;
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted file kinds. Matched anywhere inside the MIME type and the
/// extension, so `text/csv` and `.jpeg` both pass.
pub const ALLOWED_FILE_TYPES: &[&str] = &[
    "jpeg", "jpg", "png", "gif", "pdf", "mp4", "docx", "txt", "csv", "zip",
];

static ALLOWED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = ALLOWED_FILE_TYPES.join("|");
    Regex::new(&alternation).expect("allow-list pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeCheck {
    pub mime_valid: bool,
    pub extension_valid: bool,
}

impl FileTypeCheck {
    /// Either check passing is enough.
    pub fn is_allowed(&self) -> bool {
        self.mime_valid || self.extension_valid
    }
}

pub fn check_file_type(mime_type: &str, extension: &str) -> FileTypeCheck {
    FileTypeCheck {
        mime_valid: ALLOWED_PATTERN.is_match(mime_type),
        extension_valid: ALLOWED_PATTERN.is_match(&extension.to_lowercase()),
    }
}

pub fn check_upload(file: &UploadedFile) -> FileTypeCheck {
    let check = check_file_type(&file.content_type, &file.extension());
    tracing::debug!(
        mime_type = %file.content_type,
        file_name = %file.file_name,
        mime_valid = check.mime_valid,
        extension_valid = check.extension_valid,
        "Checked upload file type"
    );
    check
}
