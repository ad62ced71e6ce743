//! Calculator service binary.
//!
//! Installs the trisected diagnostic sink, reads configuration from the
//! environment and runs the HTTP server on port 3000 by default.

use calc_service::{ServerConfig, logging, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    logging::init(&config.log_dir);

    run_server(config).await
}
