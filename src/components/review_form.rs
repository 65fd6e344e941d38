//! Review Form Component
//!
//! The three editable fields and the resubmit button.

use leptos::prelude::*;
use web_sys::SubmitEvent;

use review_flow::FormState;

use crate::context::AppContext;

#[component]
pub fn ReviewForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let loading = move || state.with(FormState::loading);

    view! {
        <form class="description-form" on:submit=on_submit>
            <div class="form-group">
                <label for="issuerName">"Nombre del Emisor:"</label>
                <input
                    type="text"
                    id="issuerName"
                    placeholder="Ingresa el nombre del emisor"
                    prop:value=move || state.with(|s| s.review().issuer_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit(|s| s.set_issuer_name(value));
                    }
                />
            </div>

            <div class="form-group">
                <label for="shoppingCenter">"Centro Comercial:"</label>
                <input
                    type="text"
                    id="shoppingCenter"
                    placeholder="Ingresa el centro comercial"
                    prop:value=move || state.with(|s| s.review().shopping_center.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit(|s| s.set_shopping_center(value));
                    }
                />
            </div>

            <div class="form-group">
                <label for="description">"Descripción del caso:"</label>
                <textarea
                    id="description"
                    class="description-textarea"
                    rows=4
                    placeholder="Ingresa la descripción detallada del caso"
                    prop:value=move || state.with(|s| s.review().description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit(|s| s.set_description(value));
                    }
                />
            </div>

            <button type="submit" class="submit-button" disabled=loading>
                {move || if loading() { "Procesando..." } else { "Agregar Descripción del Caso" }}
            </button>
        </form>
    }
}
