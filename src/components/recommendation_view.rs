//! Recommendation View
//!
//! The whole page: prompt form, status, summary, cards and image overlay.

use leptos::prelude::*;

use crate::components::{ImageModal, ItemGrid, PromptForm, RecommendationSummary, StatusBanner};

#[component]
pub fn RecommendationView() -> impl IntoView {
    view! {
        <div class="recommendation-view">
            <h1>"OrderBot Recommendations"</h1>
            <PromptForm />
            <StatusBanner />
            <RecommendationSummary />
            <ItemGrid />
            <ImageModal />
        </div>
    }
}
