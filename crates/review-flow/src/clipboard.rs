//! Clipboard Text
//!
//! Plain-text rendering of a record for the "copy" button.

use crate::models::ExtractedRecord;

/// Render the six record fields as a label/value block.
pub fn format_record(record: &ExtractedRecord) -> String {
    format!(
        "Nombre del cliente: {}\n\
         Centro Comercial: {}\n\
         Fecha de pago: {}\n\
         Hora de pago: {}\n\
         Modelo de la placa: {}\n\
         \n\
         Descripción del caso:\n\
         {}",
        record.client_name(),
        record.shopping_center(),
        record.payment_date(),
        record.payment_time(),
        record.plate_model(),
        record.description.as_deref().unwrap_or_default(),
    )
}
