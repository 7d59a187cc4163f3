//! Core data for Quickmock, a disposable HTTP mock server.
//!
//! This crate holds everything the server and the interactive console share:
//! the endpoint model, the definition loader that seeds it, and the
//! [`EndpointRegistry`] both of them operate on concurrently.
//!
//! # Example
//!
//! ```no_run
//! use quickmock_core::{definition, EndpointRegistry};
//! use std::sync::Arc;
//!
//! let endpoints = definition::load_file("mocks.yaml")?;
//! let registry = Arc::new(EndpointRegistry::new(endpoints));
//! assert!(registry.find("GET", "/health").is_some());
//! # Ok::<(), quickmock_core::DefinitionError>(())
//! ```

pub mod definition;
pub mod endpoint;
pub mod registry;
pub mod stats;

pub use definition::{load_file, parse_definition, DefinitionError};
pub use endpoint::{
    is_valid_status_code, normalize_status_code, parse_status_code, validate_path, Endpoint,
    Method, Response, DEFAULT_STATUS_CODE,
};
pub use registry::EndpointRegistry;
pub use stats::RequestStats;
