// ABOUTME: CLI binary for the iacg-feed listing adapter.
// ABOUTME: Fetches one book listing and prints the feed document as JSON.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use iacg_feed::Client;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "iacg-feed")]
#[command(about = "Fetch a b.iacg.site book listing and print it as JSON")]
struct Args {
    /// Listing category (default: day-book)
    #[arg()]
    category: Option<String>,

    /// Page number
    #[arg()]
    page: Option<String>,

    /// Override the upstream base URL
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// Output compact JSON instead of pretty
    #[arg(long = "compact")]
    compact: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

async fn run(args: &Args) -> Result<()> {
    let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout));
    if let Some(ref base_url) = args.base_url {
        let parsed = Url::parse(base_url).map_err(|e| anyhow!("invalid base URL: {e}"))?;
        builder = builder.base_url(parsed.as_str().trim_end_matches('/'));
    }
    let client = builder.build();

    let start = Instant::now();
    let feed = client
        .book_listing(args.category.as_deref(), args.page.as_deref())
        .await?;

    if args.timing {
        eprintln!("elapsed: {} ms", start.elapsed().as_millis());
    }

    let json = if args.compact {
        serde_json::to_string(&feed)?
    } else {
        serde_json::to_string_pretty(&feed)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("iacg-feed: {err}");
            ExitCode::FAILURE
        }
    }
}
