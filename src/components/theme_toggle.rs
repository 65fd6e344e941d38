//! Theme Toggle Component
//!
//! Corner button that flips the light/dark theme.

use leptos::prelude::*;

use crate::context::AppContext;

/// Light/dark switch in the corner
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let icon = move || {
        if ctx.state.with(|s| s.theme().is_dark()) {
            "☀"
        } else {
            "🌙"
        }
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Cambiar tema"
            on:click=move |_| ctx.toggle_theme()
        >
            {icon}
        </button>
    }
}
