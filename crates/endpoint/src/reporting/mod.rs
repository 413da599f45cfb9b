//! HTTP response helpers
//!
//! Every response produced for the health route carries
//! `Content-Type: application/health+json`, including the ones without a
//! body.

use hyper::header::{HeaderValue, ALLOW, CACHE_CONTROL, CONTENT_TYPE};
use hyper::{Body, Response, StatusCode};
use vitals_core::{ALLOWED_METHODS, HEALTH_MEDIA_TYPE, PREFLIGHT_CACHE_CONTROL};

/// HTTP response helper for creating consistent responses
pub struct HttpResponse;

impl HttpResponse {
    /// Answer to a pre-flight `OPTIONS` request
    pub fn preflight() -> Response<Body> {
        let mut response = Self::health_typed(StatusCode::OK, Body::empty());
        let headers = response.headers_mut();
        headers.insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static(PREFLIGHT_CACHE_CONTROL),
        );
        response
    }

    /// Create a 405 Method Not Allowed response
    pub fn method_not_allowed() -> Response<Body> {
        Self::health_typed(StatusCode::METHOD_NOT_ALLOWED, Body::empty())
    }

    /// Create a 200 response carrying a serialized health document
    pub fn health(body: Vec<u8>) -> Response<Body> {
        Self::health_typed(StatusCode::OK, Body::from(body))
    }

    /// Create a 404 Not Found response for paths outside the health route
    pub fn not_found() -> Response<Body> {
        let mut response = Response::new(Body::from("Not Found"));
        *response.status_mut() = StatusCode::NOT_FOUND;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        response
    }

    fn health_typed(status: StatusCode, body: Body) -> Response<Body> {
        let mut response = Response::new(body);
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(HEALTH_MEDIA_TYPE));
        response
    }
}
