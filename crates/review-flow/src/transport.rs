//! Transport
//!
//! The seam between the workflow and the network. `HttpTransport` sends a
//! [`FormRequest`] with `reqwest`; tests swap in scripted implementations.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::error::RequestError;
use crate::models::ExtractedRecord;
use crate::request::{FormRequest, FIELD_FILE};

/// Performs a built request and decodes the JSON answer.
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: FormRequest) -> Result<ExtractedRecord, RequestError>;
}

/// `reqwest`-backed transport (browser `fetch` on wasm32)
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Headers of the file part of a multipart body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilePart<'a> {
    pub field: &'static str,
    pub file_name: &'a str,
    pub content_type: &'a str,
}

impl<'a> FilePart<'a> {
    pub fn of(request: &'a FormRequest) -> Self {
        Self {
            field: FIELD_FILE,
            file_name: request.file.name(),
            content_type: request.file.content_type(),
        }
    }
}

/// Multipart body for a request: file part, then text fields.
pub(crate) fn multipart_form(request: &FormRequest) -> Result<Form, RequestError> {
    let head = FilePart::of(request);
    let part = Part::bytes(request.file.bytes().to_vec())
        .file_name(head.file_name.to_string())
        .mime_str(head.content_type)
        .map_err(|e| RequestError::Build(e.to_string()))?;

    let form = request
        .fields
        .iter()
        .fold(Form::new().part(head.field, part), |form, (name, value)| {
            form.text(*name, value.clone())
        });
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: FormRequest) -> Result<ExtractedRecord, RequestError> {
        let form = multipart_form(&request)?;

        tracing::debug!(
            call = request.kind.as_str(),
            endpoint = %request.endpoint,
            file = request.file.name(),
            "posting multipart form"
        );

        let response = self
            .client
            .post(&request.endpoint)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ExtractedRecord>().await?)
    }
}
