//! Request Builders
//!
//! Pure descriptions of the two multipart calls. Nothing here touches the
//! network; a [`Transport`](crate::transport::Transport) performs them.

use crate::config::Endpoints;
use crate::models::{ReviewFields, UploadedFile};

// ========================
// Multipart Field Names
// ========================

pub const FIELD_FILE: &str = "file";
pub const FIELD_ISSUER_NAME: &str = "issuerName";
pub const FIELD_SHOPPING_CENTER: &str = "shoppingCenter";
pub const FIELD_DESCRIPTION: &str = "description";

/// Which of the two calls a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Ingest,
    Submit,
}

impl CallKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CallKind::Ingest => "ingest",
            CallKind::Submit => "submit",
        }
    }
}

/// A multipart POST: the file part first, then the text fields in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub kind: CallKind,
    pub endpoint: String,
    pub file: UploadedFile,
    pub fields: Vec<(&'static str, String)>,
}

impl FormRequest {
    /// Value of a text field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Ingest call: the file with empty placeholders for the review fields.
pub fn ingest_request(file: &UploadedFile, endpoints: &Endpoints) -> FormRequest {
    FormRequest {
        kind: CallKind::Ingest,
        endpoint: endpoints.ingest.clone(),
        file: file.clone(),
        fields: vec![
            (FIELD_ISSUER_NAME, String::new()),
            (FIELD_SHOPPING_CENTER, String::new()),
            (FIELD_DESCRIPTION, String::new()),
        ],
    }
}

/// Submit call: the file with the review fields exactly as typed.
pub fn submit_request(
    file: &UploadedFile,
    fields: &ReviewFields,
    endpoints: &Endpoints,
) -> FormRequest {
    FormRequest {
        kind: CallKind::Submit,
        endpoint: endpoints.submit.clone(),
        file: file.clone(),
        fields: vec![
            (FIELD_ISSUER_NAME, fields.issuer_name.clone()),
            (FIELD_SHOPPING_CENTER, fields.shopping_center.clone()),
            (FIELD_DESCRIPTION, fields.description.clone()),
        ],
    }
}
