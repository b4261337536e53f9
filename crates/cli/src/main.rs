mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runtime::{Capability, Configuration, LoadOutcome, ToolManifestLoader};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use config::Overrides;
use error::{Error, Result};

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Realtime voice client configuration and tool manifest loader", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./parley.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the manifest server, e.g. http://localhost:8888
    #[arg(long, global = true)]
    server: Option<String>,

    /// Voice to use for the session
    #[arg(long, global = true)]
    voice: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the tool manifest and print the resulting tools
    Tools,
    /// Load the tool manifest and print the whole configuration
    Show,
    /// Print the glyph for a weather code
    Icon {
        /// WMO weather interpretation code
        code: u16,
    },
    /// Enable a capability on the server and reload
    Enable {
        /// Capability name (weather, search)
        capability: String,
    },
    /// Disable a capability on the server and reload
    Disable {
        /// Capability name (weather, search)
        capability: String,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::resolve(
        cli.config.as_deref(),
        Overrides {
            server: cli.server.as_deref(),
            voice: cli.voice.as_deref(),
        },
    )?;
    debug!(manifest = %config.endpoints.tools_config, "configuration resolved");

    match cli.command {
        Some(Commands::Tools) | None => cmd_tools(&mut config).await,
        Some(Commands::Show) => cmd_show(&mut config).await,
        Some(Commands::Icon { code }) => cmd_icon(&config, code),
        Some(Commands::Enable { capability }) => cmd_set(&mut config, &capability, true).await,
        Some(Commands::Disable { capability }) => cmd_set(&mut config, &capability, false).await,
    }
}

/// Application start: load the manifest once. A failed load is logged by the
/// loader and the client carries on without optional tools.
async fn start(config: &mut Configuration) -> Result<()> {
    let mut loader = ToolManifestLoader::new(&config.endpoints)?;
    if let Some(outcome) = loader.on_ready(config).await {
        debug!(?outcome, "start-up tool load finished");
    }
    Ok(())
}

async fn cmd_tools(config: &mut Configuration) -> Result<()> {
    start(config).await?;
    println!("{}", serde_json::to_string_pretty(config.tools())?);
    Ok(())
}

async fn cmd_show(config: &mut Configuration) -> Result<()> {
    start(config).await?;
    println!("{}", serde_json::to_string_pretty(&*config)?);
    Ok(())
}

fn cmd_icon(config: &Configuration, code: u16) -> Result<()> {
    match config.weather_icon(code) {
        Some(glyph) => println!("{glyph}"),
        None => println!("unknown weather code {code}"),
    }
    Ok(())
}

async fn cmd_set(config: &mut Configuration, capability: &str, enabled: bool) -> Result<()> {
    let capability: Capability = capability.parse()?;
    let mut loader = ToolManifestLoader::new(&config.endpoints)?;

    let mut manifest = loader.fetch().await?;
    manifest.set_enabled(capability, enabled);
    loader.update(&manifest).await?;

    match loader.load(config).await {
        LoadOutcome::Loaded { .. } => {
            println!("{}", serde_json::to_string_pretty(config.tools())?);
            Ok(())
        }
        LoadOutcome::Failed { reason } => Err(Error::LoadFailed { reason }),
    }
}
