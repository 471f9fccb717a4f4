use crate::router::ParamVec;
use may_minihttp::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

/// Parsed HTTP request data used by [`super::AppService`].
#[derive(Debug)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// HTTP headers (lowercase keys)
    pub headers: HashMap<String, String>,
    /// Query string pairs, decoded, duplicates preserved in order
    pub query_params: ParamVec,
    /// Parsed JSON body, if the request carried one that parses
    pub body: Option<serde_json::Value>,
}

/// Parse query string pairs from a raw URL path.
///
/// Everything after the first `?` is percent-decoded with
/// `form_urlencoded`. Duplicate keys are preserved in order so that
/// list-typed parameters can collect every occurrence.
pub fn parse_query_params(raw_path: &str) -> ParamVec {
    let mut params = ParamVec::new();
    if let Some(pos) = raw_path.find('?') {
        let query_str = &raw_path[pos + 1..];
        for (k, v) in url::form_urlencoded::parse(query_str.as_bytes()) {
            params.push((Arc::from(k.as_ref()), v.to_string()));
        }
    }
    params
}

/// Extract method, path, headers, query pairs and JSON body from a raw
/// `may_minihttp` request.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let query_params = parse_query_params(&raw_path);

    let body = {
        let mut body_str = String::new();
        match req.body().read_to_string(&mut body_str) {
            Ok(size) if size > 0 => {
                let parsed: Result<serde_json::Value, _> = serde_json::from_str(&body_str);
                if parsed.is_err() {
                    debug!(size_bytes = size, "request body is not valid JSON");
                }
                parsed.ok()
            }
            _ => None,
        }
    };

    debug!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        query_count = query_params.len(),
        has_body = body.is_some(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        headers,
        query_params,
        body,
    }
}
