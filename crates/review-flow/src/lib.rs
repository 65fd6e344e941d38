//! Review Flow
//!
//! UI-agnostic core of the JSON intake form:
//! - models: uploaded file, extracted record, review fields
//! - state: the single view state and its transitions
//! - request / transport: pure request builders and the network seam
//! - workflow: drives a call from user action to state update

pub mod clipboard;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod state;
pub mod transport;
pub mod workflow;


pub use config::{Endpoints, COPY_CONFIRM_DELAY_MS};
pub use error::{FormError, RequestError, RequiredField};
pub use models::{is_json_file, ExtractedRecord, ReviewFields, Theme, UploadedFile};
pub use request::{CallKind, FormRequest};
pub use state::{CallTicket, CopyTicket, FormState, Phase};
pub use transport::{HttpTransport, Transport};
pub use workflow::{Completion, StateCell, Workflow};
