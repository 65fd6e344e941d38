//! UI Components
//!
//! Pieces of the intake card.

mod result_panel;
mod review_form;
mod theme_toggle;
mod upload_area;

pub use result_panel::ResultPanel;
pub use review_form::ReviewForm;
pub use theme_toggle::ThemeToggle;
pub use upload_area::UploadArea;
