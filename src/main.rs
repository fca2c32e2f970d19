//! Flickr search proxy.
//!
//! ```text
//!   Browser                 flickr-proxy                         Flickr REST API
//!   ───────                 ────────────                         ───────────────
//!   GET /api/images?q=cat ─▶ search ────────────────────────────▶ photos.search
//!                            └─ per photo (concurrent) ─────────▶ photos.getSizes
//!                  ◀─ [{id,title,url}, ...] (upstream order)
//!
//!   GET /api/images/{id}/details/
//!                         ─▶ metadata ─┬────────────────────────▶ photos.getInfo
//!                                      └────────────────────────▶ photos.getSizes
//!                  ◀─ {id,title,description,posted,tags,url}
//! ```

use clap::Parser;
use std::path::PathBuf;

use flickr_proxy::lifecycle::startup::{self, StartupOptions};

#[derive(Parser)]
#[command(name = "flickr-proxy")]
#[command(about = "JSON proxy for Flickr photo search", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides PORT and the config file).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    startup::run(StartupOptions {
        config_path: cli.config,
        port: cli.port,
    })
    .await?;

    Ok(())
}
