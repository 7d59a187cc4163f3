//! Definition loading: turns a YAML or JSON document into the initial
//! endpoint list.
//!
//! Two document shapes are understood:
//! - the native format, a list of `{method, path, response: {code, content}}`
//!   records, kept in document order
//! - OpenAPI 3 / Swagger 2, detected by a top-level `openapi` or `swagger` key
//!
//! Any failure is fatal: callers must not start serving with a partial list.

mod error;
mod native;
mod openapi;

pub use error::DefinitionError;
pub use openapi::OPENAPI_PLACEHOLDER_BODY;

use crate::endpoint::Endpoint;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Encoding of a definition file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Result<Self, DefinitionError> {
        let ext = extension.trim_start_matches('.');
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Ok(SourceFormat::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Ok(SourceFormat::Json)
        } else {
            Err(DefinitionError::UnsupportedExtension(extension.to_string()))
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Yaml => f.write_str("YAML"),
            SourceFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Document schema detected from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Native,
    OpenApi,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Native => f.write_str("native"),
            DocumentKind::OpenApi => f.write_str("OpenAPI"),
        }
    }
}

/// A decoded but not yet interpreted document.
enum Document {
    Yaml(serde_yaml::Value),
    Json(serde_json::Value),
}

impl Document {
    fn decode(bytes: &[u8], format: SourceFormat) -> Result<Self, DefinitionError> {
        Ok(match format {
            SourceFormat::Yaml => Document::Yaml(serde_yaml::from_slice(bytes)?),
            SourceFormat::Json => Document::Json(serde_json::from_slice(bytes)?),
        })
    }

    fn kind(&self) -> DocumentKind {
        let marked = match self {
            Document::Yaml(v) => v.get("openapi").is_some() || v.get("swagger").is_some(),
            Document::Json(v) => v.get("openapi").is_some() || v.get("swagger").is_some(),
        };
        if marked {
            DocumentKind::OpenApi
        } else {
            DocumentKind::Native
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Document::Yaml(v) => v.is_null(),
            Document::Json(v) => v.is_null(),
        }
    }

    fn into_typed<T: DeserializeOwned>(self) -> Result<T, DefinitionError> {
        Ok(match self {
            Document::Yaml(v) => serde_yaml::from_value(v)?,
            Document::Json(v) => serde_json::from_value(v)?,
        })
    }
}

/// Parse definition bytes whose encoding is given by `extension`
/// (`yaml`, `yml` or `json`, with or without the leading dot).
pub fn parse_definition(bytes: &[u8], extension: &str) -> Result<Vec<Endpoint>, DefinitionError> {
    let format = SourceFormat::from_extension(extension)?;

    if format == SourceFormat::Yaml && bytes.iter().all(u8::is_ascii_whitespace) {
        warn!("Definition document is empty, no endpoints loaded");
        return Ok(Vec::new());
    }

    let document = Document::decode(bytes, format)?;
    let kind = document.kind();
    let endpoints = match kind {
        DocumentKind::OpenApi => document.into_typed::<openapi::OpenApiDocument>()?.into_endpoints(),
        DocumentKind::Native if document.is_null() => Vec::new(),
        DocumentKind::Native => native::into_endpoints(document.into_typed()?)?,
    };

    info!(
        "Loaded {} endpoints from {} {} definition",
        endpoints.len(),
        kind,
        format
    );
    Ok(endpoints)
}

/// Read and parse a definition file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Endpoint>, DefinitionError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    // Reject the extension before touching the file system.
    SourceFormat::from_extension(extension)?;

    let bytes = std::fs::read(path).map_err(|source| DefinitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_definition(&bytes, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Method;
    use std::io::Write;

    #[test]
    fn test_native_yaml_preserves_order() {
        let yaml = r#"
- method: GET
  path: /users
  response:
    code: 200
    content: '[]'
- method: POST
  path: /users
  response:
    code: 201
    content: created
- method: delete
  path: /users/1
  response:
    code: 204
"#;
        let endpoints = parse_definition(yaml.as_bytes(), "yaml").unwrap();
        assert_eq!(
            endpoints,
            vec![
                Endpoint::new(Method::Get, "/users", 200, "[]"),
                Endpoint::new(Method::Post, "/users", 201, "created"),
                Endpoint::new(Method::Delete, "/users/1", 204, ""),
            ]
        );
    }

    #[test]
    fn test_native_json() {
        let json = r#"[
            {"method": "POST", "path": "/x", "response": {"code": 201, "content": "ok"}},
            {"method": "GET", "path": "/x", "response": {"code": 200, "content": "{\"a\":1}", "extra": true}}
        ]"#;
        let endpoints = parse_definition(json.as_bytes(), ".json").unwrap();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0], Endpoint::new(Method::Post, "/x", 201, "ok"));
        assert_eq!(endpoints[1].response.content, r#"{"a":1}"#);
    }

    #[test]
    fn test_native_normalizes_status_codes() {
        let yaml = r#"
- method: GET
  path: /a
  response:
    code: 999
- method: GET
  path: /b
  response:
    code: "abc"
- method: GET
  path: /c
  response:
    code: "404"
- method: GET
  path: /d
"#;
        let codes: Vec<u16> = parse_definition(yaml.as_bytes(), "yml")
            .unwrap()
            .into_iter()
            .map(|e| e.response.code)
            .collect();
        assert_eq!(codes, vec![200, 200, 404, 200]);
    }

    #[test]
    fn test_json_codes_outside_the_known_set_become_200() {
        let json = r#"[
            {"method": "GET", "path": "/a", "response": {"code": 999}},
            {"method": "GET", "path": "/b", "response": {"code": 70000}},
            {"method": "GET", "path": "/c", "response": {"code": -1}},
            {"method": "GET", "path": "/d", "response": {"code": 12.5}},
            {"method": "GET", "path": "/e", "response": {"code": 418}}
        ]"#;
        let codes: Vec<u16> = parse_definition(json.as_bytes(), "json")
            .unwrap()
            .into_iter()
            .map(|e| e.response.code)
            .collect();
        assert_eq!(codes, vec![200, 200, 200, 200, 418]);
    }

    #[test]
    fn test_native_numeric_content_becomes_text() {
        let yaml = "- method: GET\n  path: /n\n  response:\n    code: 200\n    content: 42\n";
        let endpoints = parse_definition(yaml.as_bytes(), "yaml").unwrap();
        assert_eq!(endpoints[0].response.content, "42");
    }

    #[test]
    fn test_native_unknown_method_is_fatal() {
        let yaml = "- method: GET\n  path: /ok\n- method: FETCH\n  path: /bad\n";
        let err = parse_definition(yaml.as_bytes(), "yaml").unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_malformed_documents_are_fatal() {
        assert!(matches!(
            parse_definition(b"- method: GET\n  path: [unclosed", "yaml"),
            Err(DefinitionError::Yaml(_))
        ));
        assert!(matches!(
            parse_definition(b"[{\"method\": \"GET\",", "json"),
            Err(DefinitionError::Json(_))
        ));
        assert!(matches!(
            parse_definition(b"{\"not\": \"a list\"}", "json"),
            Err(DefinitionError::Json(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            parse_definition(b"[]", "toml"),
            Err(DefinitionError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_empty_yaml_yields_no_endpoints() {
        assert!(parse_definition(b"", "yaml").unwrap().is_empty());
        assert!(parse_definition(b"[]", "json").unwrap().is_empty());
    }

    #[test]
    fn test_openapi_yaml() {
        let yaml = r#"
openapi: 3.0.0
info:
  title: Pets
  version: "1"
paths:
  /pets:
    get:
      responses:
        200:
          description: ok
    post:
      responses:
        201:
          description: created
  /pets/{id}:
    parameters:
      - name: id
        in: path
    get:
      responses:
        200:
          description: ok
    delete:
      responses:
        204:
          description: gone
    options:
      responses:
        200:
          description: ok
  x-internal: true
"#;
        let endpoints = parse_definition(yaml.as_bytes(), "yaml").unwrap();
        assert_eq!(endpoints.len(), 5);
        assert!(endpoints
            .iter()
            .all(|e| e.response.code == 200 && e.response.content == OPENAPI_PLACEHOLDER_BODY));
        let routes: Vec<(Method, &str)> = endpoints
            .iter()
            .map(|e| (e.method, e.path.as_str()))
            .collect();
        assert_eq!(
            routes,
            vec![
                (Method::Get, "/pets"),
                (Method::Post, "/pets"),
                (Method::Get, "/pets/{id}"),
                (Method::Delete, "/pets/{id}"),
                (Method::Options, "/pets/{id}"),
            ]
        );
    }

    #[test]
    fn test_swagger_json_ignores_connect_and_trace() {
        let json = r#"{
            "swagger": "2.0",
            "paths": {
                "/a": {"get": {}, "put": {}, "patch": {}, "head": {}, "trace": {}, "connect": {}},
                "/b": {"parameters": []}
            }
        }"#;
        let endpoints = parse_definition(json.as_bytes(), "json").unwrap();
        let methods: Vec<Method> = endpoints.iter().map(|e| e.method).collect();
        assert_eq!(
            methods,
            vec![Method::Get, Method::Put, Method::Patch, Method::Head]
        );
        assert!(endpoints.iter().all(|e| e.path == "/a"));
    }

    #[test]
    fn test_openapi_without_paths() {
        let endpoints = parse_definition(b"openapi: 3.1.0\n", "yaml").unwrap();
        assert!(endpoints.is_empty());
    }

    #[test]
    fn test_marker_must_be_top_level() {
        // a native record that merely mentions "openapi" stays native
        let yaml = "- method: GET\n  path: /spec\n  response:\n    code: 200\n    content: 'openapi: 3.0.0'\n";
        let endpoints = parse_definition(yaml.as_bytes(), "yaml").unwrap();
        assert_eq!(endpoints[0].response.content, "openapi: 3.0.0");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"method": "PUT", "path": "/f", "response": {{"code": 202, "content": "ok"}}}}]"#
        )
        .unwrap();

        let endpoints = load_file(file.path()).unwrap();
        assert_eq!(endpoints, vec![Endpoint::new(Method::Put, "/f", 202, "ok")]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, DefinitionError::Io { .. }));
    }

    #[test]
    fn test_load_file_checks_extension_first() {
        let err = load_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DefinitionError::UnsupportedExtension(ext) if ext == "txt"));
    }
}
