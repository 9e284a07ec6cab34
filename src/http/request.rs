//! Inbound request as seen by the router.

use bytes::Bytes;
use std::collections::HashMap;

/// HTTP method.
///
/// Methods outside the standard set are kept verbatim so `/test` can echo
/// whatever token the client sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
    Trace,
    Extension(String),
}

impl Method {
    /// The method token as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Extension(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&hyper::Method> for Method {
    fn from(method: &hyper::Method) -> Self {
        match *method {
            hyper::Method::GET => Method::Get,
            hyper::Method::POST => Method::Post,
            hyper::Method::PUT => Method::Put,
            hyper::Method::DELETE => Method::Delete,
            hyper::Method::PATCH => Method::Patch,
            hyper::Method::HEAD => Method::Head,
            hyper::Method::OPTIONS => Method::Options,
            hyper::Method::CONNECT => Method::Connect,
            hyper::Method::TRACE => Method::Trace,
            ref other => Method::Extension(other.as_str().to_string()),
        }
    }
}

/// A fully buffered inbound request.
#[derive(Debug, Clone)]
pub struct FixtureRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path, without the query string.
    pub path: String,
    /// Headers keyed by lowercase name.
    pub headers: HashMap<String, String>,
    /// Request body, `None` when empty.
    pub body: Option<Bytes>,
}

impl FixtureRequest {
    /// Create a new request with no headers and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header. The name is lowercased and a repeated name has its
    /// values joined with `", "`.
    pub fn header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.append_header(key.as_ref(), value.as_ref());
        self
    }

    pub(crate) fn append_header(&mut self, key: &str, value: &str) {
        self.headers
            .entry(key.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Set the request body. An empty body is stored as `None`.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        self.body = (!body.is_empty()).then_some(body);
        self
    }

    /// Get a header value by case-insensitive name.
    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(&key.to_ascii_lowercase())
    }

    /// The body decoded as text, lossily. Empty when there is no body.
    pub fn text(&self) -> String {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }
}

impl Default for FixtureRequest {
    fn default() -> Self {
        Self::new(Method::Get, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_hyper() {
        assert_eq!(Method::from(&hyper::Method::POST), Method::Post);
        assert_eq!(Method::from(&hyper::Method::TRACE), Method::Trace);

        let purge = hyper::Method::from_bytes(b"PURGE").unwrap();
        assert_eq!(Method::from(&purge), Method::Extension("PURGE".to_string()));
        assert_eq!(Method::from(&purge).to_string(), "PURGE");
    }

    #[test]
    fn test_headers_lowercased_and_joined() {
        let req = FixtureRequest::new(Method::Get, "/headers")
            .header("X-Trace", "a")
            .header("x-trace", "b");

        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.get_header("X-TRACE"), Some(&"a, b".to_string()));
    }

    #[test]
    fn test_empty_body_is_none() {
        let req = FixtureRequest::default().body("");
        assert!(req.body.is_none());
        assert_eq!(req.text(), "");

        let req = FixtureRequest::default().body("hello");
        assert_eq!(req.text(), "hello");
    }
}
