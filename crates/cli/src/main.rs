use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lafires")]
#[command(about = "LA fires relief API: shelters, air quality, recovery progress", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "6000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Geocode an address through the same normalization the API applies
    Geocode { address: String },
    /// Query shelters around a coordinate pair
    Shelters {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        /// Search radius in kilometers
        #[arg(short, long, default_value = "50")]
        distance: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Geocode { address } => commands::geocode::run(&address).await,
        Commands::Shelters { lat, lon, distance } => {
            commands::shelters::run(lat, lon, distance).await
        },
    }
}
