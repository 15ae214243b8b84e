//! Upstream store client
//!
//! Wraps the PocketBase REST API: admin authentication, collection
//! declaration, record seeding and the three record queries. Pure
//! request/response mapping; nothing is retried and no request timeout is
//! set, so a call blocks until the upstream answers or the transport fails.

use crate::config::UpstreamConfig;
use crate::logger;
use crate::upstream::error::{Result, UpstreamError};
use crate::upstream::records::{collection_schema, ToolRecord};

/// Outcome of a collection declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOutcome {
    Created,
    AlreadyExists,
}

/// Client for the upstream store holding the tool records
///
/// The bearer token is written once during bootstrap, before the listener
/// starts; afterwards the client is shared immutably across request tasks.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    token: Option<String>,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            collection: config.collection.clone(),
            token: None,
        }
    }

    /// Whether startup authentication succeeded
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Exchange admin credentials for a bearer token
    ///
    /// On failure the client stays token-less and the gateway continues in
    /// read-only mode; the caller decides whether to skip schema and seeding.
    pub async fn authenticate(&mut self, identity: &str, secret: &str) -> Result<()> {
        let url = format!("{}/api/admins/auth-with-password", self.base_url);
        let payload = serde_json::json!({
            "identity": identity,
            "password": secret,
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Auth(format!(
                "auth-with-password returned {status}: {body}"
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::Auth(e.to_string()))?;

        match data["token"].as_str() {
            Some(token) => {
                self.token = Some(token.to_string());
                Ok(())
            }
            None => Err(UpstreamError::Auth(
                "auth response did not contain a token".to_string(),
            )),
        }
    }

    /// Declare the tool record collection (idempotent)
    ///
    /// A 400 whose body mentions "already exists" counts as success.
    pub async fn ensure_collection(&self) -> Result<SchemaOutcome> {
        let url = format!("{}/api/collections", self.base_url);
        let payload = collection_schema(&self.collection);

        let response = self
            .with_auth(self.client.post(&url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Schema(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        classify_schema_response(status, &body)
    }

    /// Best-effort insert of sample records
    ///
    /// Each record is inserted independently; failures are logged and do not
    /// abort the batch. Returns the number of accepted records.
    pub async fn seed_samples(&self, records: &[ToolRecord]) -> usize {
        let url = self.records_url();
        let mut accepted = 0;

        for record in records {
            let result = self
                .with_auth(self.client.post(&url))
                .json(record)
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => accepted += 1,
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    logger::log_seed_failure(&record.name, &format!("{status}: {body}"));
                }
                Err(e) => {
                    logger::log_seed_failure(&record.name, &e.to_string());
                }
            }
        }

        accepted
    }

    /// Fetch every record in the collection
    pub async fn list_all(&self) -> Result<String> {
        self.get_records(None).await
    }

    /// Fetch records whose category field equals `category` exactly
    pub async fn list_by_category(&self, category: &str) -> Result<String> {
        self.get_records(Some(&category_filter(category))).await
    }

    /// Fetch records where `query` is a substring of name or description
    pub async fn search(&self, query: &str) -> Result<String> {
        self.get_records(Some(&search_filter(query))).await
    }

    /// Issue a record listing request, optionally constrained by a filter
    /// expression, and return the upstream body verbatim
    async fn get_records(&self, filter: Option<&str>) -> Result<String> {
        let mut request = self.client.get(self.records_url());
        if let Some(expr) = filter {
            request = request.query(&[("filter", expr)]);
        }

        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Connection(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    /// Attach the bearer token when one was captured at startup
    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    fn records_url(&self) -> String {
        format!(
            "{}/api/collections/{}/records",
            self.base_url, self.collection
        )
    }
}

/// Build an exact-match filter expression over the category field
pub fn category_filter(category: &str) -> String {
    format!("category='{}'", escape_filter_value(category))
}

/// Build an OR filter matching substring presence in name or description
pub fn search_filter(query: &str) -> String {
    let escaped = escape_filter_value(query);
    format!("name~'{escaped}'||description~'{escaped}'")
}

/// Escape single quotes so user input cannot break out of the expression
fn escape_filter_value(value: &str) -> String {
    value.replace('\'', "\\'")
}

/// Classify an upstream answer to a collection declaration
///
/// Exposed separately from `ensure_collection` so the idempotence rule is
/// testable without a live upstream.
fn classify_schema_response(status: u16, body: &str) -> Result<SchemaOutcome> {
    if (200..300).contains(&status) {
        return Ok(SchemaOutcome::Created);
    }
    if status == 400 && body.to_lowercase().contains("already exists") {
        return Ok(SchemaOutcome::AlreadyExists);
    }
    Err(UpstreamError::Schema(format!("{status}: {body}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_exact_match() {
        assert_eq!(
            category_filter("text_generation"),
            "category='text_generation'"
        );
    }

    #[test]
    fn test_search_filter_matches_name_or_description() {
        assert_eq!(search_filter("gpt"), "name~'gpt'||description~'gpt'");
    }

    #[test]
    fn test_filter_values_escape_quotes() {
        assert_eq!(category_filter("a'b"), "category='a\\'b'");
        assert_eq!(search_filter("it's"), "name~'it\\'s'||description~'it\\'s'");
    }

    #[test]
    fn test_schema_created_on_2xx() {
        assert_eq!(
            classify_schema_response(200, "{}").unwrap(),
            SchemaOutcome::Created
        );
        assert_eq!(
            classify_schema_response(201, "{}").unwrap(),
            SchemaOutcome::Created
        );
    }

    #[test]
    fn test_schema_already_exists_is_success() {
        // Second declaration must be recognized as success regardless of case
        let outcome = classify_schema_response(400, r#"{"message":"Collection already exists"}"#)
            .expect("already exists is not an error");
        assert_eq!(outcome, SchemaOutcome::AlreadyExists);

        let outcome = classify_schema_response(400, "ALREADY EXISTS").expect("case-insensitive");
        assert_eq!(outcome, SchemaOutcome::AlreadyExists);
    }

    #[test]
    fn test_schema_other_failures_are_errors() {
        assert!(classify_schema_response(400, "invalid schema").is_err());
        assert!(classify_schema_response(500, "boom").is_err());
        assert!(classify_schema_response(401, "already exists").is_err());
    }

    fn test_config() -> crate::config::UpstreamConfig {
        crate::config::UpstreamConfig {
            base_url: "http://localhost:8090/".to_string(),
            admin_identity: "admin@example.com".to_string(),
            admin_secret: "admin123".to_string(),
            collection: "ai_tools".to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = UpstreamClient::new(&test_config());
        assert_eq!(
            client.records_url(),
            "http://localhost:8090/api/collections/ai_tools/records"
        );
    }

    #[test]
    fn test_fresh_client_starts_unauthenticated() {
        // Bootstrap skips schema declaration and seeding off this flag
        let client = UpstreamClient::new(&test_config());
        assert!(!client.is_authenticated());
    }
}
