//! Browser Glue
//!
//! Thin wrappers over the DOM APIs the form needs: reading picked files,
//! the async clipboard and the theme class on `<html>`.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use review_flow::{FormError, Theme, UploadedFile};

/// Class toggled on the document root for the dark theme
const DARK_CLASS: &str = "dark";

/// First file of a picker or drop, if any
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

/// Read a browser file into memory.
pub async fn read_file(file: &File) -> Result<UploadedFile, FormError> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|err| {
        tracing::warn!("[FILE] could not read {}: {:?}", file.name(), err);
        FormError::FileUnreadable
    })?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(UploadedFile::new(file.name(), file.type_(), bytes))
}

/// Write text to the system clipboard.
pub async fn write_clipboard(text: &str) -> Result<(), FormError> {
    let window = web_sys::window().ok_or(FormError::ClipboardFailed)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
        tracing::warn!("[CLIPBOARD] write rejected: {:?}", err);
        FormError::ClipboardFailed
    })
}

/// Reflect the theme on the document root.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        tracing::warn!("[THEME] could not toggle class: {:?}", err);
    }
}
