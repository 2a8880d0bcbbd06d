//! Frontend Models
//!
//! Data structures matching the recommendation service payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// One recommended menu item (matches service `matches[]` entries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Image_URL")]
    pub image_url: String,
    /// Previous price; the service sends 0 when there is none
    #[serde(rename = "Old_Price", default, deserialize_with = "nonzero_price")]
    pub old_price: Option<f64>,
}

/// Body of `POST /query-items`
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub prompt: &'a str,
}

/// Response of `POST /query-items`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matches: Vec<RecommendationItem>,
    /// Markdown summary written by the service
    #[serde(default)]
    pub recommendation: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RecommendationItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RecommendationItem>>::deserialize(deserializer)?.unwrap_or_default())
}

fn nonzero_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.filter(|p| *p > 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(QueryRequest { prompt: "I want something sweet" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "I want something sweet" }));
    }

    #[test]
    fn test_decode_matches_in_order() {
        let json = r#"{
            "matches": [
                {"Name": "Chocolate Cake", "Category": "Cake", "Price": 950.0,
                 "Description": "Rich cake", "Image_URL": "https://x/cake.jpg",
                 "similarity": 0.91, "source_file": "cakes.csv"},
                {"Name": "Fajita Pizza", "Category": "Pizza", "Price": 1299,
                 "Description": "Spicy", "Image_URL": "https://x/pizza.jpg", "Old_Price": 1499.0}
            ],
            "recommendation": "- Try the **cake**"
        }"#;
        let resp: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.matches.len(), 2);
        assert_eq!(resp.matches[0].name, "Chocolate Cake");
        assert_eq!(resp.matches[0].old_price, None);
        assert_eq!(resp.matches[1].price, 1299.0);
        assert_eq!(resp.matches[1].old_price, Some(1499.0));
        assert_eq!(resp.recommendation.as_deref(), Some("- Try the **cake**"));
    }

    #[test]
    fn test_missing_or_null_matches_is_empty() {
        let resp: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.matches.is_empty());
        assert_eq!(resp.recommendation, None);

        let resp: QueryResponse = serde_json::from_str(r#"{"matches": null}"#).unwrap();
        assert!(resp.matches.is_empty());
    }

    #[test]
    fn test_zero_old_price_is_none() {
        let json = r#"{"Name": "Tea", "Category": "Drinks", "Price": 100,
            "Description": "", "Image_URL": "", "Old_Price": 0.0}"#;
        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.old_price, None);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let json = r#"{"matches": [{"Name": "Tea", "Category": "Drinks", "Price": "cheap",
            "Description": "", "Image_URL": ""}]}"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());

        let json = r#"{"matches": [{"Name": "Tea", "Price": 1.0,
            "Description": "", "Image_URL": ""}]}"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());
    }
}
