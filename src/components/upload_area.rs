//! Upload Area Component
//!
//! Drop target that doubles as a button for the hidden file input.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};

use crate::browser;
use crate::context::AppContext;

#[component]
pub fn UploadArea() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let input_ref = NodeRef::<html::Input>::new();

    // Without this the browser opens the file instead of dropping it
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let files = ev.data_transfer().and_then(|transfer| transfer.files());
        if let Some(file) = browser::first_file(files) {
            ctx.select_file(file);
        }
    };

    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = browser::first_file(input.files()) {
            ctx.select_file(file);
        }
        // Let the same file be picked again
        input.set_value("");
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let file_name = move || {
        let name = ctx.state.with(|s| s.file_name().to_string());
        (!name.is_empty()).then(|| view! { <p class="file-name">{name}</p> })
    };

    view! {
        <div
            class="file-upload-area"
            on:dragover=on_dragover
            on:drop=on_drop
            on:click=open_picker
        >
            <span class="file-icon">"📄"</span>
            <p>"Arrastra y suelta tu archivo JSON aquí o haz clic para seleccionar"</p>
            {file_name}
            <input
                type="file"
                class="file-input"
                accept=".json,application/json"
                node_ref=input_ref
                on:click=move |ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
