//! API Configuration
//!
//! Where the recommendation service lives. The host page can override the
//! build-time default with `<meta name="orderbot-api-base" content="...">`.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const QUERY_ITEMS_PATH: &str = "/query-items";
const META_NAME: &str = "orderbot-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE.to_string() }
    }
}

impl ApiConfig {
    /// First non-blank of: page meta tag, build-time `ORDERBOT_API_BASE`, default
    pub fn resolve(meta: Option<String>, build_env: Option<&str>) -> Self {
        let base_url = meta
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| build_env.map(str::trim).filter(|s| !s.is_empty()).map(String::from))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { base_url }
    }

    /// Resolve against the current document
    pub fn load() -> Self {
        Self::resolve(read_meta_base(), option_env!("ORDERBOT_API_BASE"))
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), QUERY_ITEMS_PATH)
    }
}

fn read_meta_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let el = document
        .query_selector(&format!("meta[name=\"{}\"]", META_NAME))
        .ok()??;
    el.dyn_ref::<web_sys::HtmlMetaElement>().map(|m| m.content())
}
