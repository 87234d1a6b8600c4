use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use metronome_cli::{
    commands::status as status_cmd,
    config::{Overrides, find_config, resolve_endpoint},
    provider::status_client,
};
use metronome_core::TimeUnit;

#[derive(Debug, Parser)]
#[command(
    name = "metronome-status",
    about = "Query Metronome auction and converter status",
    version
)]
struct Cli {
    /// Path to the configuration file (defaults to ./metronome.toml, then the user config dir)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RPC URL of the chain the contracts live on
    #[arg(long, env = "METRONOME_RPC_URL", value_name = "URL")]
    rpc_url: Option<String>,

    /// Address of the Auctions contract
    #[arg(long, value_name = "ADDRESS")]
    auctions: Option<String>,

    /// Address of the AutonomousConverter contract
    #[arg(long, value_name = "ADDRESS")]
    converter: Option<String>,

    /// Log level written to stderr
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the status of the daily auction
    Auction(AuctionArgs),

    /// Show the status of the autonomous converter
    Converter,
}

#[derive(Debug, Args)]
struct AuctionArgs {
    /// Report timestamps in milliseconds instead of seconds
    #[arg(long)]
    ms: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match find_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let overrides = Overrides {
        rpc_url: cli.rpc_url,
        auctions: cli.auctions,
        converter: cli.converter,
    };
    let endpoint = resolve_endpoint(config, overrides)?;
    let client = status_client(endpoint);

    let output = match cli.command {
        Commands::Auction(args) => {
            status_cmd::auction(&client, TimeUnit::from_millis_flag(args.ms)).await?
        }
        Commands::Converter => status_cmd::converter(&client).await?,
    };
    println!("{output}");

    Ok(())
}
