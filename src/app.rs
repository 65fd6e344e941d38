//! JSON Intake App
//!
//! Single card: upload area, then result and review form once the ingest
//! call has answered.

use leptos::prelude::*;

use review_flow::{Endpoints, FormState};

use crate::browser;
use crate::components::{ResultPanel, ReviewForm, ThemeToggle, UploadArea};
use crate::context::AppContext;
use crate::store::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let state = ViewState::new();
    let endpoints = Endpoints::from_build_env();
    tracing::info!(ingest = %endpoints.ingest, submit = %endpoints.submit, "[APP] starting");

    // Provide context to all children
    provide_context(AppContext::new(state, endpoints));

    // Keep <html> in sync with the theme flag
    Effect::new(move |_| {
        browser::apply_theme(state.with(FormState::theme));
    });

    let has_result = move || state.with(|s| s.result().is_some());

    view! {
        <main class="container">
            <ThemeToggle />

            <div class="card">
                <h1>"Procesador de Archivos JSON"</h1>

                <UploadArea />

                <Show when=has_result>
                    <ResultPanel />
                    <ReviewForm />
                </Show>

                {move || state.with(FormState::error_message).map(|message| view! {
                    <div class="error-message">{message}</div>
                })}
            </div>
        </main>
    }
}
