//! MockServer: binds the listener and runs the accept loop.
//!
//! Each accepted connection is served on its own task, so requests can
//! overlap each other and the console freely; the only shared state is the
//! registry handed in at construction.

use crate::dispatcher::handle_request;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use quickmock_core::{EndpointRegistry, RequestStats};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// HTTP server answering requests from a shared [`EndpointRegistry`].
pub struct MockServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    registry: Arc<EndpointRegistry>,
    stats: Arc<RequestStats>,
}

impl MockServer {
    /// Bind to `host:port`. Port 0 picks a free port; see [`MockServer::local_addr`].
    pub async fn bind(
        host: &str,
        port: u16,
        registry: Arc<EndpointRegistry>,
        stats: Arc<RequestStats>,
    ) -> Result<Self, ServerError> {
        let bind_error = |source| ServerError::Bind {
            addr: format!("{host}:{port}"),
            source,
        };
        let listener = TcpListener::bind((host, port)).await.map_err(bind_error)?;
        let local_addr = listener.local_addr().map_err(bind_error)?;

        info!("Mock server bound to {}", local_addr);
        Ok(Self {
            listener,
            local_addr,
            registry,
            stats,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until `shutdown` fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let port = self.local_addr.port();
        loop {
            tokio::select! {
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, addr)) => {
                            let registry = Arc::clone(&self.registry);
                            let stats = Arc::clone(&self.stats);
                            tokio::spawn(async move {
                                let io = TokioIo::new(stream);
                                let service = service_fn(move |req| {
                                    handle_request(req, Arc::clone(&registry), Arc::clone(&stats))
                                });
                                if let Err(e) = http1::Builder::new()
                                    .serve_connection(io, service)
                                    .await
                                {
                                    debug!("Connection error from {}: {}", addr, e);
                                }
                            });
                        }
                        Err(e) => {
                            error!("Accept error on port {}: {}", port, e);
                        }
                    }
                }
                _ = shutdown.recv() => {
                    info!("Mock server on port {} shutting down", port);
                    break;
                }
            }
        }
    }
}
