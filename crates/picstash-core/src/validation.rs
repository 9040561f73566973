//! File-intake validation.
//!
//! The original expressed acceptance through a streaming callback; here
//! it is a pure function over the declared part metadata, decoupled from
//! the multipart protocol. Only the client-declared content type is
//! checked, never the file bytes.

/// Why a file part was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Part arrived under a field name other than the configured one.
    UnexpectedField(String),
    /// Declared content type is not on the allow-list.
    DisallowedContentType(String),
    /// Part arrived after the per-request file cap was reached.
    TooManyFiles { max: usize },
}

/// Outcome of checking one file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

/// Accept-or-reject check for incoming file parts.
#[derive(Clone, Debug)]
pub struct FileFilter {
    field_name: String,
    allowed_mime_types: Vec<String>,
    max_files: usize,
}

impl FileFilter {
    pub fn new(field_name: String, allowed_mime_types: Vec<String>, max_files: usize) -> Self {
        Self {
            field_name,
            allowed_mime_types,
            max_files,
        }
    }

    /// Check one part given its field name, declared content type, and
    /// how many files were already accepted in this request.
    pub fn check(&self, field_name: &str, content_type: &str, accepted_so_far: usize) -> Verdict {
        if field_name != self.field_name {
            return Verdict::Rejected(RejectReason::UnexpectedField(field_name.to_string()));
        }

        if accepted_so_far >= self.max_files {
            return Verdict::Rejected(RejectReason::TooManyFiles {
                max: self.max_files,
            });
        }

        let normalized = content_type.to_lowercase();
        if !self.allowed_mime_types.iter().any(|ct| ct == &normalized) {
            return Verdict::Rejected(RejectReason::DisallowedContentType(
                content_type.to_string(),
            ));
        }

        Verdict::Accepted
    }
}
