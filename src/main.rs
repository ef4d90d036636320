//! Fixture server binary.
//!
//! ```text
//! startup:
//!     parse args → load config → init tracing → bind listener → serve
//!
//! shutdown:
//!     SIGINT → stop accepting → drain in-flight requests → exit
//! ```

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bundlesink_fixtures::config::{load_config, ServerConfig};
use bundlesink_fixtures::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "bundlesink-fixtures")]
#[command(about = "Fixture page server for bundle-sink browser tests", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => load_config(&path)?,
        None => ServerConfig::default(),
    };

    // RUST_LOG wins; the configured level is the fallback.
    let default_filter = format!(
        "bundlesink_fixtures={},tower_http=debug",
        config.observability.log_level
    );
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("bundlesink-fixtures v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        assets_dir = %config.assets.dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
