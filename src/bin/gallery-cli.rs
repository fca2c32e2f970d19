use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gallery-cli")]
#[command(about = "Query a running flickr-proxy from the terminal", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8088")]
    url: String,

    /// API path prefix the proxy is configured with.
    #[arg(long, default_value = "/api")]
    prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search photos
    Search {
        text: String,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show details for one photo
    Details { id: String },
    /// Check proxy liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}{}", cli.url.trim_end_matches('/'), cli.prefix);

    let res = match cli.command {
        Commands::Search { text, page } => {
            client
                .get(format!("{}/images", base))
                .query(&[("q", text), ("page", page.to_string())])
                .send()
                .await?
        }
        Commands::Details { id } => {
            client
                .get(format!("{}/images/{}/details/", base, id))
                .send()
                .await?
        }
        Commands::Health => {
            client
                .get(format!("{}/health", cli.url.trim_end_matches('/')))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
