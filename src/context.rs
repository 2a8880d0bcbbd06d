//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpRecommendationClient;
use crate::config::ApiConfig;
use crate::store::{self, RecommendationStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// View state
    pub store: RecommendationStore,
    /// Resolved once at mount
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(store: RecommendationStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn client(&self) -> HttpRecommendationClient {
        self.config.with_value(HttpRecommendationClient::new)
    }

    /// Run one submit cycle in the background
    pub fn submit(&self) {
        let ctx = *self;
        spawn_local(async move {
            let client = ctx.client();
            store::submit(&client, &ctx.store).await;
        });
    }
}
