//! Result Panel Component
//!
//! Read-only view of the current record with a copy-to-clipboard button.

use leptos::prelude::*;

use review_flow::{ExtractedRecord, FormState};

use crate::context::AppContext;

type FieldReader = fn(&ExtractedRecord) -> &str;

/// (label, accessor, css class) for each always-shown row
const ROWS: &[(&str, FieldReader, &str)] = &[
    ("Nombre del cliente:", ExtractedRecord::client_name, "result-item"),
    ("Centro Comercial:", ExtractedRecord::shopping_center, "result-item"),
    ("Fecha de pago:", ExtractedRecord::payment_date, "result-item"),
    ("Hora de pago:", ExtractedRecord::payment_time, "result-item"),
    ("Modelo de la placa:", ExtractedRecord::plate_model, "result-item model-plate"),
];

#[component]
pub fn ResultPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let field_text = move |read: FieldReader| {
        state.with(|s| s.result().map(read).unwrap_or_default().to_string())
    };

    let description = move || {
        state.with(|s| s.result().and_then(ExtractedRecord::description).map(str::to_string))
    };

    let copy_label = move || {
        if state.with(FormState::copied) {
            "¡Copiado!"
        } else {
            "Copiar al Portapapeles"
        }
    };

    view! {
        <div class="results-container">
            <h2>"Información del JSON"</h2>
            <div class="json-display">
                {ROWS
                    .iter()
                    .map(|&(label, read, class)| view! {
                        <div class=class>
                            <strong>{label}</strong>
                            " "
                            {move || field_text(read)}
                        </div>
                    })
                    .collect_view()}
                {move || description().map(|text| view! {
                    <div class="result-item case-description">
                        <strong>"Descripción del caso:"</strong>
                        <p>{text}</p>
                    </div>
                })}
            </div>
        </div>

        <button type="button" class="copy-button" on:click=move |_| ctx.copy_result()>
            "📋 "
            {copy_label}
        </button>
    }
}
