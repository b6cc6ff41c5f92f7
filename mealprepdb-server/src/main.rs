//! mealprepdb server binary
//!
//! Loads configuration, connects to the database, runs migrations and
//! serves the REST API.

use anyhow::Result;
use clap::Parser;
use mealprepdb_config::{ConfigLoader, LoggingConfig, MealprepConfig};
use mealprepdb_config::domains::logging::LogFormat;
use mealprepdb_rest_api::{create_rest_app, AppConfig};
use mealprepdb_storage::{DatabaseConfig, DatabaseConnection};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Database backend for meal prepping", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Bind address override (host:port)
    #[arg(short, long)]
    bind: Option<String>,

    /// Print default configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", MealprepConfig::generate_sample());
        return Ok(());
    }

    let mut config = ConfigLoader::new().load(cli.config.as_ref())?;
    apply_cli_overrides(&mut config, &cli)?;

    init_tracing(&config.logging);

    let db = DatabaseConnection::new(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        connection_timeout: config.database.connection_timeout,
    })
    .await?;

    if config.database.auto_migrate {
        db.migrate().await?;
    }

    let app = create_rest_app(
        db,
        AppConfig {
            api_prefix: config.server.api_prefix.clone(),
            allowed_origins: config.server.allowed_origins.clone(),
            ..Default::default()
        },
    );

    let addr = config.server.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("mealprepdb listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut MealprepConfig, cli: &Cli) -> Result<()> {
    if let Some(database_url) = &cli.database_url {
        config.database.url = database_url.clone();
    }

    if let Some(bind) = &cli.bind {
        let (host, port) = bind
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("Invalid bind address '{}': expected host:port", bind))?;
        config.server.bind_address = host.to_string();
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", bind, e))?;
    }

    Ok(())
}

/// Initialize the tracing subscriber from the logging configuration.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown signal handler: {}", err);
    }
}
