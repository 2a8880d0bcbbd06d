//! Image Modal Component
//!
//! Full-screen overlay with the enlarged image of the selected item.

use leptos::ev;
use leptos::prelude::*;

use crate::store::{use_recommendation_store, RecommendationStateStoreFields, StateCell};

/// Closes on the × button, a backdrop click, or Escape
#[component]
pub fn ImageModal() -> impl IntoView {
    let store = use_recommendation_store();

    let close = move || store.with_state(|s| s.close_modal());

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.modal_open().get_untracked() {
            close();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || store.modal_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button type="button" class="modal-close" title="Close" on:click=move |_| close()>
                        "×"
                    </button>
                    <img
                        class="modal-image"
                        src=move || store.selected_image().get().unwrap_or_default()
                        alt="Selected"
                    />
                </div>
            </div>
        </Show>
    }
}
