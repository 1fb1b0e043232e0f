//! Request / Response values
//!
//! Plain data copies of what crosses the worker boundary. Bodies are held
//! in memory; the cached assets are small.

pub const OFFLINE_BODY: &str = "Offline - content not available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Absolute URL, also the cache key
    pub url: String,
    /// Value of the `Accept` header
    pub accept: Option<String>,
    /// Bypass the HTTP cache (used while precaching)
    pub no_cache: bool,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            accept: None,
            no_cache: false,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }

    pub fn accepts_html(&self) -> bool {
        self.accept
            .as_deref()
            .map(|a| a.contains("text/html"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            content_type: Some(content_type.to_string()),
            body: body.into(),
        }
    }

    /// Synthetic reply when nothing is cached for an offline request
    pub fn service_unavailable() -> Self {
        Self {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            content_type: Some("text/plain".to_string()),
            body: OFFLINE_BODY.as_bytes().to_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Statuses that must not carry a body
    pub fn is_null_body_status(&self) -> bool {
        matches!(self.status, 101 | 204 | 205 | 304)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_html() {
        let req = Request::get("https://board.test/").with_accept("text/html,application/xhtml+xml");
        assert!(req.accepts_html());
        assert!(!Request::get("https://board.test/app.js").with_accept("*/*").accepts_html());
        assert!(!Request::get("https://board.test/app.js").accepts_html());
    }

    #[test]
    fn test_service_unavailable_shape() {
        let resp = Response::service_unavailable();
        assert_eq!(resp.status, 503);
        assert_eq!(resp.content_type.as_deref(), Some("text/plain"));
        assert_eq!(resp.text(), OFFLINE_BODY);
    }
}
