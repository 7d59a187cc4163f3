//! OpenAPI / Swagger documents.
//!
//! Only the `paths` table is read. Every operation becomes one endpoint with a
//! 200 status and a fixed placeholder body; response schemas are not modeled.

use crate::endpoint::{Endpoint, Method};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Body served for endpoints synthesized from an OpenAPI operation.
pub const OPENAPI_PLACEHOLDER_BODY: &str = "Mocked response for OpenAPI";

#[derive(Debug, Deserialize)]
pub(super) struct OpenApiDocument {
    #[serde(default)]
    paths: Option<BTreeMap<String, PathEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PathEntry {
    Item(PathItem),
    // vendor extensions (`x-...`) and anything else that isn't a path item
    Other(IgnoredAny),
}

#[derive(Debug, Default, Deserialize)]
struct PathItem {
    #[serde(default)]
    get: Option<IgnoredAny>,
    #[serde(default)]
    post: Option<IgnoredAny>,
    #[serde(default)]
    put: Option<IgnoredAny>,
    #[serde(default)]
    patch: Option<IgnoredAny>,
    #[serde(default)]
    delete: Option<IgnoredAny>,
    #[serde(default)]
    head: Option<IgnoredAny>,
    #[serde(default)]
    options: Option<IgnoredAny>,
}

impl PathItem {
    fn has_operation(&self, method: Method) -> bool {
        let op = match method {
            Method::Get => &self.get,
            Method::Post => &self.post,
            Method::Put => &self.put,
            Method::Patch => &self.patch,
            Method::Delete => &self.delete,
            Method::Head => &self.head,
            Method::Options => &self.options,
            // no representation in the document schema
            Method::Connect | Method::Trace => return false,
        };
        op.is_some()
    }
}

impl OpenApiDocument {
    /// Synthesize endpoints in path order, then `Method::OPENAPI` order.
    pub(super) fn into_endpoints(self) -> Vec<Endpoint> {
        let mut endpoints = Vec::new();
        for (path, entry) in self.paths.unwrap_or_default() {
            let PathEntry::Item(item) = entry else {
                continue;
            };
            if !path.starts_with('/') {
                continue;
            }
            for method in Method::OPENAPI {
                if item.has_operation(method) {
                    endpoints.push(Endpoint::new(
                        method,
                        path.clone(),
                        200,
                        OPENAPI_PLACEHOLDER_BODY,
                    ));
                }
            }
        }
        endpoints
    }
}
