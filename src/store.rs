//! View State Store
//!
//! The whole form lives in one `FormState` held by a Leptos signal.

use leptos::prelude::*;
use review_flow::{FormState, StateCell};

/// Reactive handle to the form state
#[derive(Clone, Copy)]
pub struct ViewState(RwSignal<FormState>);

impl ViewState {
    pub fn new() -> Self {
        Self(RwSignal::new(FormState::new()))
    }

    /// Read the state, tracking the signal
    pub fn with<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        self.0.with(f)
    }

    /// Read the state without subscribing
    pub fn with_untracked<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        self.0.with_untracked(f)
    }
}

impl StateCell for ViewState {
    fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        // None once the owning view is disposed
        self.0.try_update(f)
    }
}
