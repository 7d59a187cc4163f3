//! Request dispatch: answers each request from the endpoint registry.
//!
//! Matching is a linear scan in registry order comparing method and path
//! exactly; the first hit wins. Anything else gets a 404.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Request, Response, StatusCode};
use quickmock_core::{Endpoint, EndpointRegistry, RequestStats};
use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

/// Body returned when no endpoint matches.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Outcome of matching one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: NOT_FOUND_BODY.to_string(),
        }
    }
}

impl From<Endpoint> for MockResponse {
    fn from(endpoint: Endpoint) -> Self {
        Self {
            status: endpoint.response.code,
            body: endpoint.response.content,
        }
    }
}

/// Find the response for `method` and `path`.
pub fn dispatch(registry: &EndpointRegistry, method: &str, path: &str) -> MockResponse {
    match_request(registry, method, path).0
}

/// Response for a request plus whether a stored endpoint produced it.
fn match_request(registry: &EndpointRegistry, method: &str, path: &str) -> (MockResponse, bool) {
    match registry.find(method, path) {
        Some(endpoint) => (MockResponse::from(endpoint), true),
        None => (MockResponse::not_found(), false),
    }
}

/// Handle one HTTP request against the shared registry.
pub async fn handle_request<B>(
    req: Request<B>,
    registry: Arc<EndpointRegistry>,
    stats: Arc<RequestStats>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().as_str();
    let raw_path = req.uri().path();
    // Paths are compared decoded, e.g. `/a%20b` matches an endpoint `/a b`.
    let path = urlencoding::decode(raw_path).unwrap_or(Cow::Borrowed(raw_path));

    let (response, matched) = match_request(&registry, method, &path);
    stats.record(matched);
    debug!("{} {} -> {}", method, path, response.status);

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    Ok(build_response(status, response.body))
}

/// Build an HTTP response with only a status and a body.
///
/// Falls back to a bare response if the builder rejects its input.
pub fn build_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(body.into()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Internal Server Error"))))
}
