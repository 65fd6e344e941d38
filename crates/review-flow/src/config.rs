//! Build-time Configuration
//!
//! Endpoint addresses are baked in at compile time. Set `INTAKE_INGEST_URL`
//! or `INTAKE_SUBMIT_URL` while building to override the defaults.

pub const DEFAULT_INGEST_URL: &str = "http://66.241.124.7/process-json";
pub const DEFAULT_SUBMIT_URL: &str = "http://localhost:5000/process-json";

/// How long the "copied" confirmation stays visible
pub const COPY_CONFIRM_DELAY_MS: u32 = 2_000;

/// Addresses of the two remote calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Extraction endpoint, hit on every accepted file
    pub ingest: String,
    /// Resubmission endpoint, hit from the review form
    pub submit: String,
}

impl Endpoints {
    pub fn new(ingest: impl Into<String>, submit: impl Into<String>) -> Self {
        Self {
            ingest: ingest.into(),
            submit: submit.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("INTAKE_INGEST_URL").unwrap_or(DEFAULT_INGEST_URL),
            option_env!("INTAKE_SUBMIT_URL").unwrap_or(DEFAULT_SUBMIT_URL),
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_build_env()
    }
}
