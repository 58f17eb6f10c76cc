//! Collection server entry point.
//!
//! Loads a gateway service configuration, converts it once at startup, and
//! exposes the resulting Postman collection on `GET /` until interrupted.
//!
//! # Usage
//!
//! ```bash
//! gateway-postman-server --config gateway.json --listen 127.0.0.1:8090
//! curl http://127.0.0.1:8090/
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gateway_postman_config::ServiceConfig;
use gateway_postman_server::serve_on;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Serves a gateway configuration as a Postman collection.
#[derive(Debug, Parser)]
#[command(name = "gateway-postman-server", version, about)]
struct Args {
    /// Path to the gateway configuration file
    #[arg(short, long, default_value = "gateway.json")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8090")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the document stays curl-able on stdout pipelines
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,gateway_postman_collection=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let args = Args::parse();

    tracing::info!(
        "Starting gateway-postman-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let cfg = ServiceConfig::from_path(&args.config)?;
    let parsed = gateway_postman_collection::parse(&cfg)?;
    if !parsed.is_clean() {
        tracing::warn!(
            "Collection built with {} warning(s), serving the degraded document",
            parsed.warnings.len()
        );
    }

    let (handle, addr) = serve_on(args.listen, &parsed.collection).await?;
    tracing::info!(
        "Collection `{}` ready at http://{}/",
        parsed.collection.info.name,
        addr
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    handle.abort();

    Ok(())
}
