//! Envinfo entry point: serve the info API or run the client view.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envinfo::client::{ClientView, HttpEnvSource};
use envinfo::config::Config;
use envinfo::metrics;
use envinfo::server::{build_service, serve};

/// Mock environment-info API server and client view.
#[derive(Parser, Debug)]
#[command(name = "envinfo")]
#[command(about = "Serve fabricated environment info, or fetch and render it")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the info service (default).
    Serve {
        /// Listen port, overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,

        /// Pre-built client bundle, overrides STATIC_DIR.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Fetch /api/env once and print each rendered state.
    View {
        /// Service base URL, overrides API_BASE_URL.
        #[arg(long)]
        url: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("envinfo=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let (json_layer, text_layer) = if config.log_json {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(json_layer)
        .with(text_layer)
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::Serve { port, static_dir }) => cmd_serve(config, port, static_dir).await,
        Some(Command::View { url }) => cmd_view(config, url).await,
        Some(Command::CheckConfig) => cmd_check_config(config),
        None => cmd_serve(config, None, None).await,
    }
}

/// Run the info service until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(port) = port {
        config.port = port;
    }
    if static_dir.is_some() {
        config.static_dir = static_dir;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let handle = if config.metrics_enabled {
        Some(metrics::install_prometheus()?)
    } else {
        None
    };

    match &config.static_dir {
        Some(dir) => info!("Serving static bundle from {}", dir.display()),
        None => info!("Static fallback disabled"),
    }

    let router = build_service(&config, handle);
    serve(router, &config).await?;

    Ok(())
}

/// Mount the client view once against the configured service.
async fn cmd_view(config: Config, url: Option<String>) -> anyhow::Result<()> {
    let base_url = url.unwrap_or(config.api_base_url);
    let source = HttpEnvSource::new(&base_url)?;
    info!("Fetching {}", source.endpoint());

    let mut view = ClientView::mount(source);
    println!("{}", view.render());

    view.activate().await;
    println!("{}", view.render());

    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(config: Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ENVINFO - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.bind_host, config.port);
    println!("  Environment: {}", config.environment());
    println!(
        "  Static Dir: {}",
        config
            .static_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "disabled".to_string())
    );
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  API Base URL: {}", config.api_base_url);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
