//! HTTP response building module
//!
//! Shapes upstream results and the homepage document into HTTP responses,
//! decoupled from routing and from the upstream client.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 JSON response passing the upstream collection through verbatim
///
/// An empty collection is still a 200; emptiness is the upstream's answer,
/// not an error.
pub fn build_json_response(body: String, enable_cors: bool, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = body.len();
    let payload = if is_head { Bytes::new() } else { Bytes::from(body) };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Content-Length", content_length);

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(payload)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 500 response carrying a short human-readable message
///
/// Only the message text is exposed; upstream internals stay server-side.
pub fn build_error_response(message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(500)
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    const BODY: &str = "405 Method Not Allowed";
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Content-Length", BODY.len())
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from(BODY)))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(resp: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_json_response_passes_body_through() {
        let body = r#"{"items":[{"name":"ChatGPT"}]}"#.to_string();
        let resp = build_json_response(body.clone(), true, false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            header(&resp, "Content-Type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(header(&resp, "Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(header(&resp, "Content-Length"), Some("30"));
    }

    #[test]
    fn test_json_response_without_cors() {
        let resp = build_json_response("{}".to_string(), false, false);
        assert!(header(&resp, "Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_empty_collection_is_still_200() {
        let resp = build_json_response(r#"{"items":[]}"#.to_string(), true, false);
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_head_keeps_content_length() {
        let body = r#"{"items":[]}"#.to_string();
        let len = body.len().to_string();
        let resp = build_json_response(body, true, true);
        assert_eq!(header(&resp, "Content-Length"), Some(len.as_str()));
    }

    #[test]
    fn test_error_response_wraps_message() {
        let resp = build_error_response("upstream unreachable");
        assert_eq!(resp.status(), 500);
        assert_eq!(
            header(&resp, "Content-Type"),
            Some("application/json; charset=utf-8")
        );
        let expected_len = serde_json::json!({ "error": "upstream unreachable" })
            .to_string()
            .len()
            .to_string();
        assert_eq!(header(&resp, "Content-Length"), Some(expected_len.as_str()));
    }

    #[test]
    fn test_html_response() {
        let resp = build_html_response("<html></html>", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(header(&resp, "Content-Type"), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn test_method_gating_responses() {
        let rejected = build_405_response();
        assert_eq!(rejected.status(), 405);
        assert_eq!(
            header(&rejected, "Content-Length"),
            Some("405 Method Not Allowed".len().to_string().as_str())
        );
        let preflight = build_options_response(true);
        assert_eq!(preflight.status(), 204);
        assert_eq!(header(&preflight, "Access-Control-Allow-Origin"), Some("*"));
    }
}
