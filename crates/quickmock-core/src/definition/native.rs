//! Native definition format: a flat list of endpoint records.

use super::DefinitionError;
use crate::endpoint::{
    normalize_status_code, parse_status_code, Endpoint, Method, UnknownMethod, DEFAULT_STATUS_CODE,
};
use serde::de::IgnoredAny;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct RawRecord {
    method: String,
    path: String,
    #[serde(default)]
    response: Option<RawResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    code: Option<RawCode>,
    #[serde(default)]
    content: Option<RawScalar>,
}

/// Status code as written in the document. Anything unusable becomes 200.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCode {
    Int(i64),
    Text(String),
    Other(IgnoredAny),
}

impl RawCode {
    fn normalize(&self) -> u16 {
        match self {
            RawCode::Int(code) => normalize_status_code(*code),
            RawCode::Text(code) => parse_status_code(code),
            RawCode::Other(_) => DEFAULT_STATUS_CODE,
        }
    }
}

/// Response bodies are text, but YAML happily types `content: 42` as a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Text(s) => s,
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Bool(b) => b.to_string(),
        }
    }
}

/// Convert decoded records into endpoints, preserving document order.
pub(super) fn into_endpoints(records: Vec<RawRecord>) -> Result<Vec<Endpoint>, DefinitionError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let method: Method = record.method.parse().map_err(|e: UnknownMethod| {
                DefinitionError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })?;
            let response = record.response.unwrap_or_default();
            let code = response
                .code
                .as_ref()
                .map(RawCode::normalize)
                .unwrap_or(DEFAULT_STATUS_CODE);
            let content = response.content.map(RawScalar::into_text).unwrap_or_default();
            Ok(Endpoint::new(method, record.path, code, content))
        })
        .collect()
}
