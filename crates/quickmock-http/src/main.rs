//! Quickmock - disposable HTTP mock server
//!
//! # Usage
//!
//! ```bash
//! # Serve GET / -> 204 and edit endpoints in the console
//! quickmock
//!
//! # Load definitions (native list or OpenAPI) and serve on port 3000
//! quickmock -f api.yaml -p 3000
//!
//! # No console, logs on stderr
//! quickmock -f openapi.json --detached
//! ```

use anyhow::Context;
use clap::Parser;
use quickmock_core::{load_file, Endpoint, EndpointRegistry, RequestStats};
use quickmock_http::{console_exit_message, init_logging, Args, LogTarget, MockServer};
use quickmock_tui::Console;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(LogTarget::select(args.log_file.as_deref(), args.detached))?;

    let endpoints = match args.definition_file() {
        Some(path) => load_file(path)
            .with_context(|| format!("Failed to load definitions from {}", path.display()))?,
        None => {
            info!("No definition file given, serving the default endpoint set");
            Endpoint::default_set()
        }
    };

    let registry = Arc::new(EndpointRegistry::new(endpoints));
    let stats = Arc::new(RequestStats::new());

    let server = MockServer::bind(&args.host, args.port, Arc::clone(&registry), Arc::clone(&stats))
        .await?;
    let listen_addr = server.local_addr().to_string();
    info!("Serving {} endpoints on {}", registry.len(), listen_addr);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let server_task = tokio::spawn(server.run(shutdown_rx));

    if !args.detached {
        let console = Console::new(Arc::clone(&registry), Arc::clone(&stats), listen_addr.clone());
        tokio::spawn(async move {
            let result = quickmock_tui::run(console).await;
            if let Err(e) = &result {
                error!("Console failed: {:#}", e);
            }
            // Logs may be discarded in console mode
            eprintln!("{}", console_exit_message(&result, &listen_addr));
        });
    }

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;
    info!("Shutting down");

    let _ = shutdown_tx.send(());
    server_task.await.context("Server task failed")?;
    Ok(())
}
