//! Recommendation Summary Component

use leptos::prelude::*;

use crate::markdown::render_recommendation;
use crate::store::{use_recommendation_store, RecommendationStateStoreFields};

/// Markdown summary the service returns next to the matches
#[component]
pub fn RecommendationSummary() -> impl IntoView {
    let store = use_recommendation_store();

    move || store.recommendation().get().map(|text| view! {
        <section class="recommendation-summary" inner_html=render_recommendation(&text)></section>
    })
}
