//! Intake Models
//!
//! The uploaded file, the record returned by the extraction service and the
//! three fields the user reviews before resubmitting.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::RequiredField;

/// Media type accepted for uploads
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Whether a file with this name and declared type counts as JSON.
pub fn is_json_file(name: &str, media_type: &str) -> bool {
    media_type == JSON_MEDIA_TYPE || name.ends_with(".json")
}

/// File picked or dropped by the user. Replaced wholesale, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl UploadedFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Media type as declared by the browser (may be empty)
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content type to attach to the multipart part.
    ///
    /// Browsers leave the type empty when they cannot infer one; the file was
    /// accepted by extension in that case, so it goes out as JSON.
    pub fn content_type(&self) -> &str {
        if self.media_type.is_empty() {
            JSON_MEDIA_TYPE
        } else {
            &self.media_type
        }
    }
}

/// Structured result returned by either endpoint.
///
/// Every field is display text. Missing or `null` keys stay `None`; other
/// scalars (numbers, booleans) keep their JSON spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(
        rename = "nombreCliente",
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_name: Option<String>,
    #[serde(
        rename = "centroComercial",
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub shopping_center: Option<String>,
    #[serde(
        rename = "fechaPago",
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_date: Option<String>,
    #[serde(
        rename = "horaPago",
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_time: Option<String>,
    #[serde(
        rename = "modeloPlaca",
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub plate_model: Option<String>,
    #[serde(
        rename = "descripcion",
        default,
        deserialize_with = "display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl ExtractedRecord {
    pub fn client_name(&self) -> &str {
        self.client_name.as_deref().unwrap_or_default()
    }

    pub fn shopping_center(&self) -> &str {
        self.shopping_center.as_deref().unwrap_or_default()
    }

    pub fn payment_date(&self) -> &str {
        self.payment_date.as_deref().unwrap_or_default()
    }

    pub fn payment_time(&self) -> &str {
        self.payment_time.as_deref().unwrap_or_default()
    }

    pub fn plate_model(&self) -> &str {
        self.plate_model.as_deref().unwrap_or_default()
    }

    /// Description, only when the server sent a non-empty one
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

/// The three values the user edits between ingest and submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFields {
    pub issuer_name: String,
    pub shopping_center: String,
    pub description: String,
}

impl ReviewFields {
    /// Seed from an ingest response, verbatim. Missing keys become empty.
    pub fn seeded_from(record: &ExtractedRecord) -> Self {
        Self {
            issuer_name: record.client_name().to_string(),
            shopping_center: record.shopping_center().to_string(),
            description: record.description.clone().unwrap_or_default(),
        }
    }

    /// First field that is blank after trimming, in submission order
    pub fn first_blank(&self) -> Option<RequiredField> {
        [
            (RequiredField::IssuerName, &self.issuer_name),
            (RequiredField::ShoppingCenter, &self.shopping_center),
            (RequiredField::Description, &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Light/dark presentation flag for the document root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_detection() {
        assert!(is_json_file("data.json", ""));
        assert!(is_json_file("data.txt", "application/json"));
        assert!(is_json_file("export", JSON_MEDIA_TYPE));
        assert!(!is_json_file("data.JSON.txt", "text/plain"));
        assert!(!is_json_file("image.png", "image/png"));
        assert!(!is_json_file("", ""));
    }

    #[test]
    fn test_content_type_fallback() {
        let untyped = UploadedFile::new("a.json", "", b"{}".to_vec());
        assert_eq!(untyped.content_type(), JSON_MEDIA_TYPE);

        let typed = UploadedFile::new("a.json", "text/plain", b"{}".to_vec());
        assert_eq!(typed.content_type(), "text/plain");
    }

    #[test]
    fn test_record_tolerates_missing_and_odd_fields() {
        let body = r#"{
            "nombreCliente": "Ana",
            "fechaPago": null,
            "horaPago": 1430,
            "modeloPlaca": true,
            "extra": "x"
        }"#;
        let record: ExtractedRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.client_name(), "Ana");
        assert_eq!(record.shopping_center(), "");
        assert_eq!(record.payment_date, None);
        assert_eq!(record.payment_time(), "1430");
        assert_eq!(record.plate_model(), "true");
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_empty_description_is_hidden() {
        let record: ExtractedRecord = serde_json::from_str(r#"{"descripcion":""}"#).unwrap();
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_seeding_is_verbatim() {
        let record = ExtractedRecord {
            client_name: Some("  Ana Pérez ".to_string()),
            shopping_center: Some("Plaza\tNorte".to_string()),
            description: Some("línea 1\nlínea 2".to_string()),
            ..Default::default()
        };

        let fields = ReviewFields::seeded_from(&record);
        assert_eq!(fields.issuer_name, "  Ana Pérez ");
        assert_eq!(fields.shopping_center, "Plaza\tNorte");
        assert_eq!(fields.description, "línea 1\nlínea 2");
    }

    #[test]
    fn test_first_blank_order() {
        let mut fields = ReviewFields::default();
        assert_eq!(fields.first_blank(), Some(RequiredField::IssuerName));

        fields.issuer_name = "Ana".to_string();
        fields.shopping_center = " \t ".to_string();
        assert_eq!(fields.first_blank(), Some(RequiredField::ShoppingCenter));

        fields.shopping_center = "Plaza".to_string();
        fields.description = "\n".to_string();
        assert_eq!(fields.first_blank(), Some(RequiredField::Description));

        fields.description = "ok".to_string();
        assert_eq!(fields.first_blank(), None);
    }

    #[test]
    fn test_theme_toggle() {
        let theme = Theme::default();
        assert!(!theme.is_dark());
        assert!(theme.toggled().is_dark());
        assert_eq!(theme.toggled().toggled(), theme);
    }
}
