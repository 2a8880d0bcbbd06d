//! Status Banner Component
//!
//! Loading indicator and dismissible error banner.

use leptos::prelude::*;

use crate::store::{use_recommendation_store, RecommendationStateStoreFields, StateCell};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_recommendation_store();

    view! {
        <Show when=move || store.loading().get()>
            <p class="status-loading">"Loading recommendations..."</p>
        </Show>
        {move || store.error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button
                    type="button"
                    class="dismiss-btn"
                    title="Dismiss"
                    on:click=move |_| store.with_state(|s| s.dismiss_error())
                >
                    "×"
                </button>
            </div>
        })}
    }
}
