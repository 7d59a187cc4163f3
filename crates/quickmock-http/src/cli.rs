//! Command line arguments for the `quickmock` binary.

use clap::Parser;
use std::convert::Infallible;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "quickmock")]
#[command(author, version, about = "Disposable HTTP mock server with a live endpoint console")]
pub struct Args {
    /// Endpoint definitions (.yaml, .yml or .json; native list or OpenAPI).
    /// Empty means the default endpoint set.
    #[arg(short, long, env = "QUICKMOCK_FILE", value_parser = parse_file)]
    pub file: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "QUICKMOCK_PORT")]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "QUICKMOCK_HOST")]
    pub host: String,

    /// Serve without the interactive console
    #[arg(short, long, env = "QUICKMOCK_DETACHED")]
    pub detached: bool,

    /// Write logs to this file instead of discarding them while the console is open
    #[arg(long, env = "QUICKMOCK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Like clap's `PathBuf` parser, but an empty value is accepted.
fn parse_file(value: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

impl Args {
    /// Definition file to load, if one was named.
    pub fn definition_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Address shown in the console header and startup log.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
