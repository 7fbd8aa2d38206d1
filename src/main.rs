use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use staymap::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "staymap", about = "Rental listings on a terminal map")]
struct Args {
    /// Listings endpoint (overrides STAYMAP_ENDPOINT and the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Initial map zoom level
    #[arg(short, long)]
    zoom: Option<f64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to staymap.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create("staymap.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}; using defaults", e);
        config::StaymapConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            zoom: args.zoom,
        },
    );

    log::info!("staymap starting up, endpoint: {}", resolved.endpoint);

    staymap::tui::run(resolved)
}
