//! Recommendation Service Commands
//!
//! Frontend bindings to the recommendation backend.

mod query;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::QueryResponse;

pub use query::*;

/// Anything that can answer a prompt with matching menu items
#[async_trait(?Send)]
pub trait RecommendationClient {
    async fn query_items(&self, prompt: &str) -> Result<QueryResponse, FetchError>;
}
