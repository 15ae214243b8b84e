//! Tool record shape and collection schema declaration
//!
//! The upstream store owns identity, uniqueness and persistence; this module
//! only describes the shape forwarded to it.

use serde::{Deserialize, Serialize};

/// A single catalog entry as stored in the upstream collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolRecord {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Free-text category tag (e.g. "text_generation")
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Comma-separated language codes (e.g. "zh,en")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_support: Option<String>,
    /// Comma-separated free-text tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Build the collection declaration payload for the upstream store
///
/// Field names and types mirror `ToolRecord`; the upstream performs the
/// actual validation.
pub fn collection_schema(collection: &str) -> serde_json::Value {
    serde_json::json!({
        "name": collection,
        "type": "base",
        "options": {},
        "schema": [
            {"name": "name", "type": "text", "required": true},
            {"name": "description", "type": "text", "required": true},
            {"name": "url", "type": "url", "required": true},
            {"name": "category", "type": "text", "required": true},
            {"name": "rating", "type": "number", "required": false},
            {"name": "is_free", "type": "bool", "required": true},
            {"name": "is_featured", "type": "bool", "required": false},
            {"name": "language_support", "type": "text", "required": false},
            {"name": "tags", "type": "text", "required": false},
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_all_record_fields() {
        let schema = collection_schema("ai_tools");
        assert_eq!(schema["name"], "ai_tools");
        assert_eq!(schema["type"], "base");

        let fields = schema["schema"].as_array().expect("schema field list");
        let names: Vec<&str> = fields
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "name",
                "description",
                "url",
                "category",
                "rating",
                "is_free",
                "is_featured",
                "language_support",
                "tags"
            ]
        );

        let required: Vec<&str> = fields
            .iter()
            .filter(|f| f["required"] == true)
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(required, ["name", "description", "url", "category", "is_free"]);
    }

    #[test]
    fn test_record_serialization_skips_absent_optionals() {
        let record = ToolRecord {
            name: "Example".to_string(),
            description: "An example tool".to_string(),
            url: "https://example.com".to_string(),
            category: "text_generation".to_string(),
            rating: None,
            is_free: true,
            is_featured: None,
            language_support: None,
            tags: None,
        };

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["name"], "Example");
        assert_eq!(json["is_free"], true);
        assert!(json.get("rating").is_none());
        assert!(json.get("is_featured").is_none());
        assert!(json.get("language_support").is_none());
        assert!(json.get("tags").is_none());
    }
}
