//! Request-line parsing and response framing.
//!
//! This is not an HTTP implementation. Only `<METHOD> <PATH> <VERSION>` from
//! the first line is consumed; a request split across reads may not parse.

use hyper::StatusCode;
use std::fmt::Write;

/// Receive buffer size; a request is read with a single call of this size.
pub const READ_BUFFER_SIZE: usize = 4096;

/// The two fields of a request line the router looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
}

impl RequestLine {
    /// Parse the first line of a raw request.
    ///
    /// Missing fields come back empty, which the router treats as not found.
    pub fn parse(raw: &[u8]) -> Self {
        let text = String::from_utf8_lossy(raw);
        let line = text.lines().next().unwrap_or_default();
        let mut parts = line.split_whitespace();
        Self {
            method: parts.next().unwrap_or_default().to_owned(),
            path: parts.next().unwrap_or_default().to_owned(),
        }
    }
}

/// A JSON response ready to be framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// Serialize status line, headers, and body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = String::with_capacity(128 + self.body.len());
        // Writing into a String cannot fail.
        let _ = write!(
            head,
            "HTTP/1.1 {} {}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or_default(),
            self.body.len(),
        );
        head.push_str(&self.body);
        head.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"GET /camera/status HTTP/1.1\r\nHost: cam\r\n\r\n", "GET", "/camera/status"; "full request")]
    #[test_case(b"POST /camera/start HTTP/1.1\r\n", "POST", "/camera/start"; "request line only")]
    #[test_case(b"GET   /a   HTTP/1.0", "GET", "/a"; "no newline extra spaces")]
    #[test_case(b"GET\r\n", "GET", ""; "missing path")]
    #[test_case(b"\r\nGET / HTTP/1.1\r\n", "", ""; "blank first line")]
    #[test_case(b"", "", ""; "empty")]
    fn test_parse_request_line(raw: &[u8], method: &str, path: &str) {
        let line = RequestLine::parse(raw);
        assert_eq!(line.method, method);
        assert_eq!(line.path, path);
    }

    #[test]
    fn test_response_framing() {
        let response = Response::new(StatusCode::NOT_FOUND, r#"{"error":"Not Found"}"#.to_string());
        let bytes = response.to_bytes();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "HTTP/1.1 404 Not Found\r\n\
             Content-Type: application/json\r\n\
             Content-Length: 21\r\n\
             Connection: close\r\n\
             \r\n\
             {\"error\":\"Not Found\"}"
        );
    }

    #[test]
    fn test_content_length_counts_bytes() {
        let response = Response::new(StatusCode::OK, "{\"error\":\"caméra\"}".to_string());
        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.contains(&format!("Content-Length: {}\r\n", response.body.len())));
        assert_eq!(response.body.len(), response.body.chars().count() + 1);
    }
}
