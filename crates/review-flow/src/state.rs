//! Form State
//!
//! Everything the view shows lives in one `FormState`. Mutation goes through
//! the transition methods below, which keep the status flags consistent:
//!
//! ```text
//! Idle -> (file accepted) -> Ingesting -> (ok) -> Reviewing
//! Reviewing -> (submit) -> Submitting -> (ok) -> Reviewing
//! ```
//!
//! Every call gets a [`CallTicket`]. Only the most recent ticket may complete;
//! answers for superseded calls are dropped.

use crate::clipboard;
use crate::config::Endpoints;
use crate::error::{FormError, RequestError, RequiredField};
use crate::models::{is_json_file, ExtractedRecord, ReviewFields, Theme, UploadedFile};
use crate::request::{ingest_request, submit_request, CallKind, FormRequest};

/// Identifies one ingest or submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CallTicket(u64);

/// Identifies one copy confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// A call that has been started and must be completed with its ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCall {
    pub ticket: CallTicket,
    pub request: FormRequest,
}

/// Coarse position in the upload/review flow, derived from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ingesting,
    Reviewing,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    file: Option<UploadedFile>,
    result: Option<ExtractedRecord>,
    review: ReviewFields,
    in_flight: Option<(CallTicket, CallKind)>,
    error: Option<FormError>,
    copied: bool,
    theme: Theme,
    next_call: u64,
    next_copy: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Read Accessors
    // ========================

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    /// Name of the stored file, empty when there is none
    pub fn file_name(&self) -> &str {
        self.file.as_ref().map(UploadedFile::name).unwrap_or_default()
    }

    pub fn result(&self) -> Option<&ExtractedRecord> {
        self.result.as_ref()
    }

    pub fn review(&self) -> &ReviewFields {
        &self.review
    }

    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phase(&self) -> Phase {
        match self.in_flight {
            Some((_, CallKind::Ingest)) => Phase::Ingesting,
            Some((_, CallKind::Submit)) => Phase::Submitting,
            None if self.result.is_some() => Phase::Reviewing,
            None => Phase::Idle,
        }
    }

    /// Text for the copy button, when there is a result to copy
    pub fn clipboard_text(&self) -> Option<String> {
        self.result.as_ref().map(clipboard::format_record)
    }

    // ========================
    // File Selection
    // ========================

    /// Accept or reject a pick by its name and declared type, before any
    /// bytes are read.
    ///
    /// Accepting clears the old file, result and error and reserves the
    /// ingest ticket, so picks are ordered by when the user made them.
    /// Rejecting clears file and result. Either way any outstanding call is
    /// superseded.
    pub fn begin_selection(
        &mut self,
        name: &str,
        media_type: &str,
    ) -> Result<CallTicket, FormError> {
        if !is_json_file(name, media_type) {
            self.reject_file(FormError::InvalidFileKind);
            return Err(FormError::InvalidFileKind);
        }

        self.file = None;
        self.result = None;
        self.error = None;
        Ok(self.start_call(CallKind::Ingest))
    }

    /// Store the bytes of an accepted pick and build its ingest request.
    ///
    /// Returns `None` if a later pick or submit took over meanwhile.
    pub fn attach_file(
        &mut self,
        ticket: CallTicket,
        file: UploadedFile,
        endpoints: &Endpoints,
    ) -> Option<PendingCall> {
        if !self.is_current(ticket) {
            return None;
        }
        Some(self.load_file(ticket, file, endpoints))
    }

    /// Accept or reject a file whose bytes are already in memory.
    pub fn select_file(
        &mut self,
        file: UploadedFile,
        endpoints: &Endpoints,
    ) -> Result<PendingCall, FormError> {
        let ticket = self.begin_selection(file.name(), file.media_type())?;
        Ok(self.load_file(ticket, file, endpoints))
    }

    fn load_file(
        &mut self,
        ticket: CallTicket,
        file: UploadedFile,
        endpoints: &Endpoints,
    ) -> PendingCall {
        let request = ingest_request(&file, endpoints);
        self.file = Some(file);
        PendingCall { ticket, request }
    }

    /// The browser could not hand over the bytes of the pick behind
    /// `ticket`. Ignored if that pick was already superseded.
    pub fn file_unreadable(&mut self, ticket: CallTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.reject_file(FormError::FileUnreadable);
        true
    }

    fn reject_file(&mut self, error: FormError) {
        self.file = None;
        self.result = None;
        self.error = Some(error);
        self.supersede_calls();
    }

    // ========================
    // Review Fields
    // ========================

    pub fn set_issuer_name(&mut self, value: String) {
        self.review.issuer_name = value;
    }

    pub fn set_shopping_center(&mut self, value: String) {
        self.review.shopping_center = value;
    }

    pub fn set_description(&mut self, value: String) {
        self.review.description = value;
    }

    /// Validate and start a submit call.
    ///
    /// Checks file, issuer, shopping center, description in that order and
    /// stops at the first failure without starting anything.
    pub fn begin_submit(&mut self, endpoints: &Endpoints) -> Result<PendingCall, FormError> {
        let checked = match (&self.file, self.review.first_blank()) {
            (None, _) => Err(RequiredField::File),
            (Some(_), Some(field)) => Err(field),
            (Some(file), None) => Ok(submit_request(file, &self.review, endpoints)),
        };
        let request = match checked {
            Ok(request) => request,
            Err(field) => {
                let error = FormError::MissingField(field);
                self.error = Some(error.clone());
                return Err(error);
            }
        };

        self.error = None;
        let ticket = self.start_call(CallKind::Submit);
        Ok(PendingCall { ticket, request })
    }

    // ========================
    // Call Completion
    // ========================

    pub fn is_current(&self, ticket: CallTicket) -> bool {
        matches!(self.in_flight, Some((current, _)) if current == ticket)
    }

    /// Apply the answer of a call. Returns `false` if the ticket was
    /// superseded, in which case nothing changes.
    ///
    /// Ingest success replaces the result and reseeds the review fields;
    /// ingest failure clears the result. Submit success replaces the result
    /// only; submit failure leaves it as it was.
    pub fn complete(
        &mut self,
        ticket: CallTicket,
        outcome: Result<ExtractedRecord, RequestError>,
    ) -> bool {
        let kind = match self.in_flight {
            Some((current, kind)) if current == ticket => kind,
            _ => return false,
        };
        self.in_flight = None;

        match (kind, outcome) {
            (CallKind::Ingest, Ok(record)) => {
                self.review = ReviewFields::seeded_from(&record);
                self.result = Some(record);
            }
            (CallKind::Ingest, Err(err)) => {
                self.result = None;
                self.error = Some(FormError::RequestFailed(err));
            }
            (CallKind::Submit, Ok(record)) => {
                self.result = Some(record);
            }
            (CallKind::Submit, Err(err)) => {
                self.error = Some(FormError::RequestFailed(err));
            }
        }
        true
    }

    fn start_call(&mut self, kind: CallKind) -> CallTicket {
        self.next_call += 1;
        let ticket = CallTicket(self.next_call);
        self.in_flight = Some((ticket, kind));
        ticket
    }

    fn supersede_calls(&mut self) {
        self.next_call += 1;
        self.in_flight = None;
    }

    // ========================
    // Copy Confirmation / Theme
    // ========================

    /// Show the copy confirmation. Hand the ticket back to
    /// [`expire_copied`](Self::expire_copied) after the confirmation delay.
    pub fn mark_copied(&mut self) -> CopyTicket {
        self.next_copy += 1;
        self.copied = true;
        CopyTicket(self.next_copy)
    }

    /// Hide the confirmation unless a later copy restarted it.
    pub fn expire_copied(&mut self, ticket: CopyTicket) {
        if ticket.0 == self.next_copy {
            self.copied = false;
        }
    }

    pub fn copy_failed(&mut self) {
        self.error = Some(FormError::ClipboardFailed);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://ingest.test", "http://submit.test")
    }

    fn json_file(name: &str) -> UploadedFile {
        UploadedFile::new(name, "application/json", b"{}".to_vec())
    }

    fn record(client: &str) -> ExtractedRecord {
        ExtractedRecord {
            client_name: Some(client.to_string()),
            shopping_center: Some("Plaza Norte".to_string()),
            description: Some("Caso".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = FormState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.loading());
        assert!(state.error().is_none());
        assert_eq!(state.file_name(), "");
        assert!(state.clipboard_text().is_none());
    }

    #[test]
    fn test_rejected_file_clears_everything() {
        let mut state = FormState::new();
        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();
        state.complete(pending.ticket, Ok(record("Ana")));

        let err = state
            .select_file(UploadedFile::new("a.png", "image/png", vec![1, 2]), &endpoints())
            .unwrap_err();

        assert_eq!(err, FormError::InvalidFileKind);
        assert_eq!(state.error(), Some(&FormError::InvalidFileKind));
        assert!(state.file().is_none());
        assert!(state.result().is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_accepted_file_starts_ingest() {
        let mut state = FormState::new();
        state.copy_failed();

        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();

        assert_eq!(pending.request.kind, CallKind::Ingest);
        assert_eq!(state.file_name(), "a.json");
        assert!(state.error().is_none());
        assert!(state.loading());
        assert_eq!(state.phase(), Phase::Ingesting);
    }

    #[test]
    fn test_ingest_failure_clears_result_and_loading() {
        let mut state = FormState::new();
        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();

        assert!(state.complete(pending.ticket, Err(RequestError::Status(500))));

        assert!(!state.loading());
        assert!(state.result().is_none());
        assert_eq!(
            state.error_message().as_deref(),
            Some("Error al procesar el archivo JSON.")
        );
    }

    #[test]
    fn test_submit_failure_keeps_result() {
        let mut state = FormState::new();
        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();
        state.complete(pending.ticket, Ok(record("Ana")));

        let pending = state.begin_submit(&endpoints()).unwrap();
        assert_eq!(state.phase(), Phase::Submitting);
        state.complete(pending.ticket, Err(RequestError::Network("offline".into())));

        assert!(!state.loading());
        assert_eq!(state.result().map(ExtractedRecord::client_name), Some("Ana"));
        assert!(matches!(state.error(), Some(FormError::RequestFailed(_))));
        assert_eq!(state.phase(), Phase::Reviewing);
    }

    #[test]
    fn test_submit_success_keeps_edited_fields() {
        let mut state = FormState::new();
        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();
        state.complete(pending.ticket, Ok(record("Ana")));
        state.set_issuer_name("Beatriz".to_string());

        let pending = state.begin_submit(&endpoints()).unwrap();
        state.complete(pending.ticket, Ok(record("Servidor")));

        assert_eq!(state.result().map(ExtractedRecord::client_name), Some("Servidor"));
        assert_eq!(state.review().issuer_name, "Beatriz");
    }

    #[test]
    fn test_submit_without_file() {
        let mut state = FormState::new();
        state.set_issuer_name("Ana".to_string());
        state.set_shopping_center("Plaza".to_string());
        state.set_description("Caso".to_string());

        let err = state.begin_submit(&endpoints()).unwrap_err();
        assert_eq!(err, FormError::MissingField(RequiredField::File));
        assert!(!state.loading());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state = FormState::new();
        let first = state.select_file(json_file("a.json"), &endpoints()).unwrap();
        let second = state.select_file(json_file("b.json"), &endpoints()).unwrap();

        assert!(!state.is_current(first.ticket));
        assert!(!state.complete(first.ticket, Ok(record("A"))));
        assert!(state.result().is_none());
        assert!(state.loading());

        assert!(state.complete(second.ticket, Ok(record("B"))));
        assert_eq!(state.result().map(ExtractedRecord::client_name), Some("B"));
        assert!(!state.loading());
    }

    #[test]
    fn test_rejection_supersedes_pending_ingest() {
        let mut state = FormState::new();
        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();
        let _ = state.select_file(UploadedFile::new("a.txt", "text/plain", vec![]), &endpoints());

        assert!(!state.loading());
        assert!(!state.complete(pending.ticket, Ok(record("A"))));
        assert!(state.result().is_none());
        assert_eq!(state.error(), Some(&FormError::InvalidFileKind));
    }

    #[test]
    fn test_file_unreadable() {
        let mut state = FormState::new();
        let ticket = state.begin_selection("a.json", "").unwrap();

        assert!(state.file_unreadable(ticket));
        assert_eq!(state.error(), Some(&FormError::FileUnreadable));
        assert!(state.file().is_none());
        assert!(!state.loading());
    }

    #[test]
    fn test_unreadable_superseded_pick_is_ignored() {
        let mut state = FormState::new();
        let old = state.begin_selection("old.json", "").unwrap();
        let new = state.begin_selection("new.json", "").unwrap();

        assert!(!state.file_unreadable(old));
        assert!(state.error().is_none());
        assert!(state.is_current(new));
    }

    #[test]
    fn test_non_json_pick_rejected_before_reading() {
        let mut state = FormState::new();
        let err = state.begin_selection("clip.mp4", "video/mp4").unwrap_err();

        assert_eq!(err, FormError::InvalidFileKind);
        assert_eq!(state.error(), Some(&FormError::InvalidFileKind));
        assert!(!state.loading());
    }

    #[test]
    fn test_later_pick_wins_when_its_bytes_arrive_first() {
        let mut state = FormState::new();
        let big = state.begin_selection("big.json", "application/json").unwrap();
        let small = state.begin_selection("small.json", "application/json").unwrap();
        assert!(state.loading());

        // small.json finishes reading first
        let pending = state
            .attach_file(small, json_file("small.json"), &endpoints())
            .unwrap();
        assert_eq!(pending.request.file.name(), "small.json");

        // big.json finishes reading later and is dropped
        assert!(state.attach_file(big, json_file("big.json"), &endpoints()).is_none());
        assert_eq!(state.file_name(), "small.json");

        assert!(state.complete(pending.ticket, Ok(record("Ana"))));
        assert_eq!(state.file_name(), "small.json");
        assert_eq!(state.phase(), Phase::Reviewing);
    }

    #[test]
    fn test_copy_confirmation_expires() {
        let mut state = FormState::new();
        let ticket = state.mark_copied();
        assert!(state.copied());

        state.expire_copied(ticket);
        assert!(!state.copied());
    }

    #[test]
    fn test_copy_confirmation_restarted_by_second_copy() {
        let mut state = FormState::new();
        let first = state.mark_copied();
        let second = state.mark_copied();

        state.expire_copied(first);
        assert!(state.copied());

        state.expire_copied(second);
        assert!(!state.copied());
    }

    #[test]
    fn test_clipboard_text_follows_result() {
        let mut state = FormState::new();
        let pending = state.select_file(json_file("a.json"), &endpoints()).unwrap();
        state.complete(pending.ticket, Ok(record("Ana")));

        let text = state.clipboard_text().unwrap();
        assert!(text.starts_with("Nombre del cliente: Ana\nCentro Comercial: Plaza Norte\n"));
        assert!(text.ends_with("Descripción del caso:\nCaso"));
    }

    #[test]
    fn test_theme_toggles_back() {
        let mut state = FormState::new();
        let original = state.theme();

        state.toggle_theme();
        assert_ne!(state.theme(), original);

        state.toggle_theme();
        assert_eq!(state.theme(), original);
    }
}
