//! Incoming HTTP request type.

use std::collections::HashMap;

use http::request::Parts;
use http::{HeaderMap, Method, Uri};

/// An incoming HTTP request: the request head plus the route's path params.
///
/// The body is not kept; every route this service exposes is a `GET`.
#[derive(Debug)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(parts: Parts, params: HashMap<String, String>) -> Self {
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            params,
        }
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Header lookup. Names are case-insensitive; non-UTF-8 values are skipped.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/poet/{letter}`, `req.param("letter")` on `/poet/a` returns `Some("a")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) fn test_request(method: Method, path: &str, params: &[(&str, &str)]) -> Request {
    let (parts, ()) = http::Request::builder()
        .method(method)
        .uri(path)
        .header("user-agent", "poet-lookup-test")
        .body(())
        .unwrap()
        .into_parts();
    let params = params
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    Request::new(parts, params)
}
