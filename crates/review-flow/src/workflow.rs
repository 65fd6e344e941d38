//! Workflow Driver
//!
//! Runs a call end to end: state transition, transport, completion. The
//! state itself lives wherever the caller keeps it (a Leptos signal in the
//! app, a `RefCell` in tests) behind [`StateCell`].

use std::cell::RefCell;

use crate::config::Endpoints;
use crate::error::FormError;
use crate::models::UploadedFile;
use crate::state::{CallTicket, FormState, PendingCall};
use crate::transport::Transport;

/// Mutable access to a [`FormState`] owned elsewhere.
///
/// Returns `None` when the state is gone (e.g. the view was unmounted while
/// a call was in flight).
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl StateCell for RefCell<FormState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// How a started call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The answer was applied to the state
    Applied,
    /// A newer call started meanwhile; the answer was dropped
    Superseded,
}

pub struct Workflow<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> Workflow<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self { transport, endpoints }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Accept a picked/dropped file and run the ingest call for it.
    ///
    /// A rejected file returns the error without touching the network.
    pub async fn select_file<S: StateCell>(
        &self,
        state: &S,
        file: UploadedFile,
    ) -> Result<Completion, FormError> {
        let name = file.name().to_string();
        let started = state.with_state(|s| s.select_file(file, &self.endpoints));
        match started {
            Some(Ok(pending)) => self.run(state, pending).await,
            Some(Err(err)) => {
                tracing::warn!(file = %name, "rejected file: {err}");
                Err(err)
            }
            None => Ok(Completion::Superseded),
        }
    }

    /// Run the ingest call for a pick accepted earlier with
    /// [`FormState::begin_selection`], once its bytes are in memory.
    ///
    /// Dropped without a request if a later pick took over while the bytes
    /// were being read.
    pub async fn ingest_selected<S: StateCell>(
        &self,
        state: &S,
        ticket: CallTicket,
        file: UploadedFile,
    ) -> Result<Completion, FormError> {
        let name = file.name().to_string();
        let attached = state
            .with_state(|s| s.attach_file(ticket, file, &self.endpoints))
            .flatten();
        match attached {
            Some(pending) => self.run(state, pending).await,
            None => {
                tracing::debug!(file = %name, "pick superseded before its bytes arrived");
                Ok(Completion::Superseded)
            }
        }
    }

    /// Validate the review form and run the submit call.
    pub async fn submit<S: StateCell>(&self, state: &S) -> Result<Completion, FormError> {
        let started = state.with_state(|s| s.begin_submit(&self.endpoints));
        match started {
            Some(Ok(pending)) => self.run(state, pending).await,
            Some(Err(err)) => {
                tracing::debug!("submit blocked: {err}");
                Err(err)
            }
            None => Ok(Completion::Superseded),
        }
    }

    async fn run<S: StateCell>(
        &self,
        state: &S,
        pending: PendingCall,
    ) -> Result<Completion, FormError> {
        let PendingCall { ticket, request } = pending;
        let kind = request.kind;

        let outcome = self.transport.send(request).await;
        let failure = outcome.as_ref().err().cloned();

        let applied = state
            .with_state(|s| s.complete(ticket, outcome))
            .unwrap_or(false);
        if !applied {
            tracing::warn!(call = kind.as_str(), "discarding answer of superseded call");
            return Ok(Completion::Superseded);
        }

        match failure {
            Some(err) => {
                tracing::warn!(call = kind.as_str(), "call failed: {err}");
                Err(FormError::RequestFailed(err))
            }
            None => {
                tracing::info!(call = kind.as_str(), "call completed");
                Ok(Completion::Applied)
            }
        }
    }
}
