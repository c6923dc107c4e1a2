//! Standalone server binary, configured entirely from the environment.
//!
//! See [`server::ServerConfig::from_env`] for the variables it reads.

use anyhow::Result;
use tracing::info;

use server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    server::init_tracing(&config.log_level);

    info!("Starting movie votes server");
    server::start_server(config).await
}
