//! ITALIAN MARAUDERS static host
//!
//! Serves the built client with history-mode fallback and the JSON data
//! files under `/data`.
//!
//! Run with: cargo run -- serve --port 8084

use clap::{Parser, Subcommand};
use marauders::config::{generate_default_config, Config, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marauders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Static host for the ITALIAN MARAUDERS calculators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the client and data files (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Built client directory
        #[arg(long)]
        dist_dir: Option<PathBuf>,
        /// JSON data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    match cli.command {
        Some(Commands::Config { output }) => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        command => {
            if let Some(Commands::Serve {
                host,
                port,
                dist_dir,
                data_dir,
            }) = command
            {
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                if let Some(dir) = dist_dir {
                    config.server.dist_dir = dir;
                }
                if let Some(dir) = data_dir {
                    config.server.data_dir = dir;
                }
            }

            init_logging(&config.logging);

            tracing::info!("Starting ITALIAN MARAUDERS host v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Client directory: {:?}", config.server.dist_dir);
            tracing::info!("Data directory: {:?}", config.server.data_dir);

            marauders::serve(config.server).await?;
            Ok(())
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("marauders={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
