//! Prompt Form Component
//!
//! Text input bound to the prompt, with submit and clear buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_recommendation_store, RecommendationStateStoreFields, StateCell};

/// Prompt input; submit is disabled while loading or while the prompt is blank
#[component]
pub fn PromptForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_recommendation_store();

    let loading = move || store.loading().get();
    let can_submit = move || store.with(|s| s.can_submit());

    // Enter key and button both land here; the store guard decides
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="prompt-form" on:submit=on_submit>
            <input
                type="text"
                class="prompt-input"
                placeholder="Ask me anything..."
                prop:value=move || store.prompt().get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store.with_state(|s| s.update_prompt(text));
                }
            />
            <button
                type="submit"
                class=move || if loading() { "submit-btn loading" } else { "submit-btn" }
                disabled=move || !can_submit()
            >
                {move || if loading() { "Loading..." } else { "Submit" }}
            </button>
            <button
                type="button"
                class="clear-btn"
                on:click=move |_| store.with_state(|s| s.clear_results())
            >
                "Clear"
            </button>
        </form>
    }
}
