//! # Storefront Pages Library
//!
//! Headless versions of the storefront pages and a CLI that drives them.
//!
//! ## Module Organization
//! ```text
//! storefront_pages/
//! ├── lib.rs          ◄─── You are here (CLI setup & run)
//! ├── dom.rs          ◄─── Headless document + DocumentState
//! ├── state/
//! │   ├── cart.rs     ◄─── Quantity stepper and cart total
//! │   ├── form.rs     ◄─── Name/email submission
//! │   ├── products.rs ◄─── Product list
//! │   ├── bench.rs    ◄─── DOM append and dedup benchmarks
//! │   ├── clock.rs    ◄─── Timestamp display
//! │   └── config.rs   ◄─── Page configuration
//! ├── commands/       ◄─── One subcommand per page
//! └── error.rs        ◄─── PageError
//! ```

pub mod commands;
pub mod dom;
pub mod error;
pub mod state;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use storefront_client::{ClientConfig, StorefrontApi, StorefrontClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use error::PageResult;
use state::PageConfig;

/// Headless storefront pages.
#[derive(Debug, Parser)]
#[command(name = "storefront-pages")]
#[command(about = "Drive the storefront pages from the command line")]
pub struct Cli {
    /// Backend base URL (overrides config file and STOREFRONT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Client config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Parses arguments, sets up logging and runs the chosen command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(execute(cli, &mut out))?;
    out.flush()?;

    Ok(())
}

/// Runs one command, writing the page output to `out`.
pub async fn execute<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let mut config = PageConfig::from_env();

    let api: Option<Arc<dyn StorefrontApi>> = if cli.command.needs_api() {
        let mut client_config = ClientConfig::load(cli.config.clone())?;
        if let Some(url) = &cli.api_url {
            client_config.base_url = url.clone();
        }
        info!(base_url = %client_config.base_url, "Using backend");
        Some(Arc::new(StorefrontClient::new(&client_config)?))
    } else {
        None
    };

    match cli.command {
        Command::Cart => {
            commands::run_cart(io::stdin().lock(), out)?;
        }
        Command::Submit { name, email } => {
            commands::submit_form(require_api(api)?, &name, &email, out).await?;
        }
        Command::Products => {
            commands::load_products(require_api(api)?, config, out).await?;
        }
        Command::DomBench { strategy, count } => {
            if let Some(count) = count {
                config.dom_append_count = count;
            }
            commands::dom_bench(&config, strategy, out)?;
        }
        Command::DedupBench { sizes, seed } => {
            if let Some(sizes) = sizes {
                config.dedup_sizes = sizes.0;
            }
            if let Some(seed) = seed {
                config.dedup_seed = seed;
            }
            commands::dedup_bench(config, out)?;
        }
        Command::Clock { timestamp } => {
            commands::show_clock(timestamp, out)?;
        }
    }

    Ok(())
}

fn require_api(api: Option<Arc<dyn StorefrontApi>>) -> PageResult<Arc<dyn StorefrontApi>> {
    api.ok_or_else(|| {
        storefront_client::ClientError::InvalidConfig("no backend configured".into()).into()
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: `info,storefront=debug`
///
/// Logs go to stderr so page output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
