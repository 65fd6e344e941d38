//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the user actions
//! that kick off async work.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use review_flow::{
    Endpoints, FormState, HttpTransport, StateCell, Workflow, COPY_CONFIRM_DELAY_MS,
};

use crate::browser;
use crate::store::ViewState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The form state
    pub state: ViewState,
    /// Endpoints baked in at build time
    endpoints: StoredValue<Endpoints>,
}

impl AppContext {
    pub fn new(state: ViewState, endpoints: Endpoints) -> Self {
        Self {
            state,
            endpoints: StoredValue::new(endpoints),
        }
    }

    fn workflow(&self) -> Workflow<HttpTransport> {
        Workflow::new(HttpTransport::new(), self.endpoints.get_value())
    }

    /// Apply a synchronous edit to the form state
    pub fn edit(&self, f: impl FnOnce(&mut FormState)) {
        self.state.with_state(f);
    }

    pub fn toggle_theme(&self) {
        self.edit(FormState::toggle_theme);
    }

    /// Accept or reject a picked/dropped file, then read it and run the
    /// ingest call. The ticket is taken at pick time, before the read.
    pub fn select_file(&self, file: web_sys::File) {
        let ctx = *self;
        let started = ctx
            .state
            .with_state(|s| s.begin_selection(&file.name(), &file.type_()));
        let Some(Ok(ticket)) = started else {
            tracing::warn!("[UPLOAD] rejected {}", file.name());
            return;
        };

        spawn_local(async move {
            let upload = match browser::read_file(&file).await {
                Ok(upload) => upload,
                Err(_) => {
                    ctx.edit(|s| {
                        s.file_unreadable(ticket);
                    });
                    return;
                }
            };
            tracing::info!(
                file = upload.name(),
                bytes = upload.bytes().len(),
                "[UPLOAD] file selected"
            );
            // Errors are already recorded in the state
            let _ = ctx.workflow().ingest_selected(&ctx.state, ticket, upload).await;
        });
    }

    /// Validate the review form and run the submit call
    pub fn submit(&self) {
        let ctx = *self;
        spawn_local(async move {
            let _ = ctx.workflow().submit(&ctx.state).await;
        });
    }

    /// Copy the current result to the clipboard and flash the confirmation
    pub fn copy_result(&self) {
        let state = self.state;
        let Some(text) = state.with_untracked(FormState::clipboard_text) else {
            return;
        };
        spawn_local(async move {
            if browser::write_clipboard(&text).await.is_err() {
                state.with_state(FormState::copy_failed);
                return;
            }
            let Some(ticket) = state.with_state(FormState::mark_copied) else {
                return;
            };
            TimeoutFuture::new(COPY_CONFIRM_DELAY_MS).await;
            state.with_state(|s| s.expire_copied(ticket));
        });
    }
}
