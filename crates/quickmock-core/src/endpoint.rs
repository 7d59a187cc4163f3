//! Endpoint model: one mocked route and its canned response.

use std::fmt;
use std::str::FromStr;

/// Status code used whenever a supplied code is missing or unrecognized.
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Standard HTTP status codes accepted for canned responses.
pub const VALID_STATUS_CODES: [u16; 63] = [
    100, 101, 102, 103, //
    200, 201, 202, 203, 204, 205, 206, 207, 208, 226, //
    300, 301, 302, 303, 304, 305, 306, 307, 308, //
    400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415, 416, 417,
    418, 421, 422, 423, 424, 425, 426, 428, 429, 431, 451, //
    500, 501, 502, 503, 504, 505, 506, 507, 508, 510, 511,
];

/// HTTP methods an endpoint can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Connect,
    Trace,
}

impl Method {
    /// Every supported method, in selector order.
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Head,
        Method::Options,
        Method::Connect,
        Method::Trace,
    ];

    /// Methods that an OpenAPI path item can carry an operation for.
    pub const OPENAPI: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Head,
        Method::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a supported method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Canned response returned for a matched endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u16,
    pub content: String,
}

/// A mocked route: method and exact path plus the response served for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub response: Response,
}

impl Endpoint {
    pub fn new(
        method: Method,
        path: impl Into<String>,
        code: u16,
        content: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            response: Response {
                code,
                content: content.into(),
            },
        }
    }

    /// Seed used when no definition file is given.
    pub fn default_set() -> Vec<Endpoint> {
        vec![Endpoint::new(Method::Get, "/", 204, "")]
    }

    /// Whether this endpoint answers the given request line.
    pub fn matches(&self, method: &str, path: &str) -> bool {
        self.method.as_str() == method && self.path == path
    }
}

/// Check whether `code` is a recognized HTTP status code.
pub fn is_valid_status_code(code: u16) -> bool {
    VALID_STATUS_CODES.contains(&code)
}

/// Parse operator- or document-supplied status code text.
///
/// Returns the encoded code when the text is exactly the decimal form of a
/// recognized status code, and [`DEFAULT_STATUS_CODE`] for anything else.
pub fn parse_status_code(code: &str) -> u16 {
    match code.parse::<u16>() {
        Ok(parsed) if is_valid_status_code(parsed) && parsed.to_string() == code => parsed,
        _ => DEFAULT_STATUS_CODE,
    }
}

/// Apply the status code rule to an integer taken from a definition document.
pub fn normalize_status_code(code: i64) -> u16 {
    u16::try_from(code)
        .ok()
        .filter(|c| is_valid_status_code(*c))
        .unwrap_or(DEFAULT_STATUS_CODE)
}

/// Paths entered interactively must be non-empty and absolute.
pub fn validate_path(path: &str) -> bool {
    path.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_method_round_trips_through_text() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
        assert_eq!("patch".parse::<Method>(), Ok(Method::Patch));
        assert!("FETCH".parse::<Method>().is_err());
    }

    #[test]
    fn test_openapi_methods_exclude_connect_and_trace() {
        assert!(!Method::OPENAPI.contains(&Method::Connect));
        assert!(!Method::OPENAPI.contains(&Method::Trace));
        assert_eq!(Method::OPENAPI.len(), 7);
    }

    #[test]
    fn test_parse_status_code() {
        assert_eq!(parse_status_code("201"), 201);
        assert_eq!(parse_status_code("418"), 418);
        assert_eq!(parse_status_code("abc"), 200);
        assert_eq!(parse_status_code(""), 200);
        assert_eq!(parse_status_code("299"), 200);
        assert_eq!(parse_status_code("+201"), 200);
        assert_eq!(parse_status_code("0201"), 200);
        assert_eq!(parse_status_code(" 404"), 200);
        assert_eq!(parse_status_code("99999999999"), 200);
    }

    #[test]
    fn test_normalize_status_code() {
        assert_eq!(normalize_status_code(404), 404);
        assert_eq!(normalize_status_code(-1), 200);
        assert_eq!(normalize_status_code(600), 200);
        assert_eq!(normalize_status_code(i64::MAX), 200);
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("/"));
        assert!(validate_path("/users/1"));
        assert!(!validate_path("users"));
        assert!(!validate_path(""));
    }

    #[test]
    fn test_default_set() {
        let endpoints = Endpoint::default_set();
        assert_eq!(endpoints, vec![Endpoint::new(Method::Get, "/", 204, "")]);
    }

    proptest! {
        #[test]
        fn prop_parse_status_code_is_total(input in ".*") {
            let code = parse_status_code(&input);
            prop_assert!(is_valid_status_code(code));
        }

        #[test]
        fn prop_parse_status_code_is_idempotent(input in ".*") {
            let once = parse_status_code(&input);
            prop_assert_eq!(parse_status_code(&once.to_string()), once);
        }

        #[test]
        fn prop_valid_codes_parse_to_themselves(index in 0usize..VALID_STATUS_CODES.len()) {
            let code = VALID_STATUS_CODES[index];
            prop_assert_eq!(parse_status_code(&code.to_string()), code);
        }
    }
}
