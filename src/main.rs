//! Standalone HTTP server for the resource directory.
//!
//! Listens on `HOST:PORT` (default `0.0.0.0:5000`) and serves the same API as
//! the Lambda executables.

use resource_directory::{config::ServerConfig, init_logging, server, Services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(true);
    let config = ServerConfig::from_env()?;
    server::serve(Services::init(), &config).await
}
