//! Item Grid Component

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::store::{use_recommendation_store, RecommendationStateStoreFields};

/// Responsive grid of item cards, in response order
#[component]
pub fn ItemGrid() -> impl IntoView {
    let store = use_recommendation_store();

    view! {
        <div class="item-grid">
            {move || store.items().get()
                .into_iter()
                .map(|item| view! { <ItemCard item=item /> })
                .collect_view()}
        </div>
    }
}
