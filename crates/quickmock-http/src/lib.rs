//! Quickmock HTTP server
//!
//! Serves the endpoints held in a shared
//! [`EndpointRegistry`](quickmock_core::EndpointRegistry): the first endpoint
//! whose method and path equal the request's answers with its stored status
//! code and body, everything else gets `404 Not Found`.
//!
//! # Example
//!
//! ```no_run
//! use quickmock_core::{Endpoint, EndpointRegistry, RequestStats};
//! use quickmock_http::MockServer;
//! use std::sync::Arc;
//! use tokio::sync::broadcast;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = Arc::new(EndpointRegistry::new(Endpoint::default_set()));
//!     let server = MockServer::bind("127.0.0.1", 8080, registry, Arc::new(RequestStats::new())).await?;
//!     let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
//!     server.run(shutdown_rx).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod dispatcher;
pub mod logging;
pub mod server;

pub use cli::Args;
pub use dispatcher::{dispatch, handle_request, MockResponse, NOT_FOUND_BODY};
pub use logging::{console_exit_message, init_logging, LogTarget};
pub use server::{MockServer, ServerError};
