//! OrderBot Frontend App
//!
//! Root component: resolves config, owns the view store.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::components::RecommendationView;
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::RecommendationState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::load();
    info!(endpoint = %config.endpoint(), "recommendation service");

    // State
    let store = Store::new(RecommendationState::new());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(store, config));

    view! {
        <main class="app-layout">
            <RecommendationView />
        </main>
    }
}
