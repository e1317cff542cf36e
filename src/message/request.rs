//! HTTP request value.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};

/// An owned HTTP request: method, URL, header multimap, body.
///
/// Duplication yields a value with identical observable content and no
/// shared mutable sub-state: header edits on one copy never appear on the
/// other. Mutation travels between chain steps only when a handler forwards
/// the mutated instance itself via [`Next::run_with`](crate::Next::run_with).
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl Request {
    /// Create a request with an empty header map and empty body.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Shorthand for a GET request.
    pub fn get(uri: Uri) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Shorthand for a POST request.
    pub fn post(uri: Uri) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn set_uri(&mut self, uri: Uri) {
        self.uri = uri;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Replace the body wholesale. Bodies are immutable buffers; there is no
    /// in-place write access.
    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = body.into();
    }

    /// Builder-style header insert.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Builder-style body replacement.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Duplicate this request: equal observable content, independent value.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_is_independent() {
        let original = Request::get("http://localhost/".parse().unwrap())
            .with_header(http::header::ACCEPT, HeaderValue::from_static("text/plain"));

        let mut copy = original.duplicate();
        copy.headers_mut()
            .insert("x-trace", HeaderValue::from_static("abc"));
        copy.set_body("payload");

        assert!(original.headers().get("x-trace").is_none());
        assert!(original.body().is_empty());
        assert_eq!(copy.headers().get(http::header::ACCEPT).unwrap(), "text/plain");
    }

    #[test]
    fn test_duplicate_equal_content() {
        let req = Request::post("http://localhost/submit".parse().unwrap()).with_body("data");
        assert_eq!(req.duplicate(), req);
    }
}
