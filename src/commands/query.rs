//! Query Items Command
//!
//! `POST /query-items` through the browser fetch API.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::RecommendationClient;
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::{QueryRequest, QueryResponse};

#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    endpoint: String,
}

impl HttpRecommendationClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self { endpoint: config.endpoint() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub fn encode_request(prompt: &str) -> Result<String, FetchError> {
    serde_json::to_string(&QueryRequest { prompt }).map_err(|e| FetchError::Request(e.to_string()))
}

/// Status check first, then decode
pub fn decode_response(status: u16, body: &str) -> Result<QueryResponse, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

#[async_trait(?Send)]
impl RecommendationClient for HttpRecommendationClient {
    async fn query_items(&self, prompt: &str) -> Result<QueryResponse, FetchError> {
        let body = encode_request(prompt)?;

        let headers = Headers::new().map_err(|e| FetchError::Request(js_err(e)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| FetchError::Request(js_err(e)))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(self.endpoint(), &opts)
            .map_err(|e| FetchError::Request(js_err(e)))?;

        let window = web_sys::window().ok_or_else(|| FetchError::Request("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::Network(js_err(e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| FetchError::Network("response is not a Response".into()))?;

        let text = JsFuture::from(resp.text().map_err(|e| FetchError::Network(js_err(e)))?)
            .await
            .map_err(|e| FetchError::Network(js_err(e)))?;
        let text = text.as_string().unwrap_or_default();

        decode_response(resp.status(), &text)
    }
}
