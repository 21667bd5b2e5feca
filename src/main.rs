mod config;

use std::path::PathBuf;

use address_geocoder::{
    geocode_results,
    static_map::{DEFAULT_FORMAT, DEFAULT_MAP_TYPE, DEFAULT_MARKER_COLOR, DEFAULT_ZOOM},
    GeocodeClient, StaticMapRequest,
};
use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use tracing::info;

use crate::config::Config;

#[derive(Parser)]
#[command(version, about = "Geocode addresses and fetch static maps from Google Maps")]
struct Cli {
    /// Overrides GOOGLE_MAPS_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Geocode an address given as fragments, e.g. "1600 Amphitheatre Pkwy" "Mountain View" CA
    Geocode {
        #[arg(required = true)]
        fragments: Vec<String>,
        /// Print the response even when the service status is not OK
        #[arg(long)]
        quiet_status: bool,
        /// One line per result instead of the raw JSON
        #[arg(long)]
        summary: bool,
    },
    /// Save a static map image of an address
    StaticMap {
        address: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
        #[arg(long, default_value_t = DEFAULT_ZOOM)]
        zoom: u8,
        #[arg(long, default_value = DEFAULT_MARKER_COLOR)]
        color: String,
        #[arg(long, default_value = DEFAULT_FORMAT)]
        format: String,
        #[arg(long, default_value = DEFAULT_MAP_TYPE)]
        map_type: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(cli.api_key);
    let client = GeocodeClient::from_optional_key(config.api_key);

    match cli.command {
        Command::Geocode {
            fragments,
            quiet_status,
            summary,
        } => {
            let response = client.geocode(&fragments, !quiet_status).await?;
            if summary {
                for result in geocode_results(&response)? {
                    let location = result.location();
                    println!(
                        "{} ({}, {})",
                        result.formatted_address,
                        location.y(),
                        location.x()
                    );
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Command::StaticMap {
            address,
            out,
            width,
            height,
            zoom,
            color,
            format,
            map_type,
        } => {
            let request = StaticMapRequest::new(address, width, height)
                .zoom(zoom)
                .marker_color(color)
                .format(format)
                .map_type(map_type);
            let path = client
                .save_static_map(&request, &out)
                .await?
                .ok_or(eyre!("Failed to save static map to {}", out.display()))?;
            info!("Done");
            println!("{}", path.display());
        }
    }
    Ok(())
}
