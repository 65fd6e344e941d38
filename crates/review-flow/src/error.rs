//! Error Types
//!
//! `RequestError` describes what went wrong on the wire; `FormError` is what
//! the user gets to see.

use thiserror::Error;

/// Transport-level failure of an ingest or submit call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("failed to build request: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            RequestError::Status(status.as_u16())
        } else if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else if err.is_builder() {
            RequestError::Build(err.to_string())
        } else {
            RequestError::Network(err.to_string())
        }
    }
}

/// Fields checked before a submit, in checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    File,
    IssuerName,
    ShoppingCenter,
    Description,
}

impl RequiredField {
    pub fn message(self) -> &'static str {
        match self {
            RequiredField::File => "Por favor, selecciona un archivo JSON.",
            RequiredField::IssuerName => "Por favor, ingresa el nombre del emisor.",
            RequiredField::ShoppingCenter => "Por favor, ingresa el centro comercial.",
            RequiredField::Description => "Por favor, ingresa la descripción.",
        }
    }
}

/// User-facing error; only the latest one is shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Por favor, selecciona un archivo JSON válido.")]
    InvalidFileKind,
    #[error("{}", .0.message())]
    MissingField(RequiredField),
    /// Cause is kept for logs only; the message stays generic
    #[error("Error al procesar el archivo JSON.")]
    RequestFailed(#[from] RequestError),
    #[error("No se pudo copiar al portapapeles.")]
    ClipboardFailed,
    #[error("No se pudo leer el archivo seleccionado.")]
    FileUnreadable,
}
