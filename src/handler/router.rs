//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, action resolution, and dispatching to the upstream client or
//! the homepage responder.

use crate::config::AppState;
use crate::handler::homepage;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Action selected for an inbound request
///
/// Resolved once per request through ordered pattern rules: exact match
/// first, then prefixed matches, then the homepage fallback. Keeping this an
/// explicit enum makes the dispatch table testable without the listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `GET /api/tools` - every record in the collection
    ListAll,
    /// `GET /api/tools/category/{category}` - exact-match category filter
    ListByCategory(String),
    /// `GET /api/search/{query}` - substring match on name or description
    Search(String),
    /// Any other path - the fixed homepage document
    Homepage,
}

impl Action {
    /// Resolve an inbound path to an action
    pub fn resolve(path: &str) -> Self {
        if path == "/api/tools" {
            return Self::ListAll;
        }
        if let Some(category) = path.strip_prefix("/api/tools/category/") {
            return Self::ListByCategory(category.to_string());
        }
        if let Some(query) = path.strip_prefix("/api/search/") {
            return Self::Search(decode_segment(query));
        }
        Self::Homepage
    }
}

/// URL-decode a path segment, falling back to the raw text on invalid input
fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), std::borrow::Cow::into_owned)
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri();
    let path = uri.path().to_string();
    let query = uri.query().map(ToString::to_string);
    let version = http_version_label(req.version());
    let is_head = method == Method::HEAD;

    // Read-only surface: GET/HEAD pass, OPTIONS gets a preflight answer,
    // everything else is rejected
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    let response = dispatch(Action::resolve(&path), &state, is_head).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            method.to_string(),
            path,
        );
        entry.query = query;
        entry.http_version = version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Render an HTTP version as it appears in a request line
fn http_version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Execute the resolved action and shape its result
async fn dispatch(action: Action, state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let enable_cors = state.config.http.enable_cors;

    let result = match action {
        Action::Homepage => {
            return http::build_html_response(homepage::get_homepage(), is_head);
        }
        Action::ListAll => state.upstream.list_all().await,
        Action::ListByCategory(category) => state.upstream.list_by_category(&category).await,
        Action::Search(query) => state.upstream.search(&query).await,
    };

    match result {
        Ok(body) => http::build_json_response(body, enable_cors, is_head),
        Err(e) => {
            logger::log_error(&format!("Upstream call failed: {e}"));
            http::build_error_response(&e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_list_all_exact_only() {
        assert_eq!(Action::resolve("/api/tools"), Action::ListAll);
        // Exact match required; anything else falls through
        assert_eq!(Action::resolve("/api/tools/"), Action::Homepage);
        assert_eq!(Action::resolve("/api/toolset"), Action::Homepage);
    }

    #[test]
    fn test_resolve_category_prefix() {
        assert_eq!(
            Action::resolve("/api/tools/category/text_generation"),
            Action::ListByCategory("text_generation".to_string())
        );
        assert_eq!(
            Action::resolve("/api/tools/category/"),
            Action::ListByCategory(String::new())
        );
    }

    #[test]
    fn test_resolve_search_decodes_value() {
        assert_eq!(
            Action::resolve("/api/search/gpt"),
            Action::Search("gpt".to_string())
        );
        assert_eq!(
            Action::resolve("/api/search/image%20art"),
            Action::Search("image art".to_string())
        );
    }

    #[test]
    fn test_resolve_search_invalid_encoding_kept_raw() {
        assert_eq!(
            Action::resolve("/api/search/%ff"),
            Action::Search("%ff".to_string())
        );
    }

    #[test]
    fn test_unmatched_paths_serve_homepage() {
        assert_eq!(Action::resolve("/"), Action::Homepage);
        assert_eq!(Action::resolve("/foo/bar"), Action::Homepage);
        assert_eq!(Action::resolve("/api"), Action::Homepage);
        assert_eq!(Action::resolve("/api/other"), Action::Homepage);
    }

    #[test]
    fn test_method_gating() {
        assert!(check_http_method(&Method::GET, true).is_none());
        assert!(check_http_method(&Method::HEAD, true).is_none());

        let preflight = check_http_method(&Method::OPTIONS, true).expect("preflight");
        assert_eq!(preflight.status(), 204);

        let rejected = check_http_method(&Method::POST, true).expect("rejected");
        assert_eq!(rejected.status(), 405);
    }

    #[test]
    fn test_homepage_document_embeds_fetch_routes() {
        let html = homepage::get_homepage();
        assert!(html.contains("/api/tools"));
        assert!(html.contains("/api/search/"));
    }
}
