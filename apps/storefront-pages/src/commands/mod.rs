//! # Commands Module
//!
//! One subcommand per page. Each builds the page's document, mounts the
//! widget, fires the events and prints what the page ends up showing.
//!
//! ```text
//! storefront-pages cart          < events.txt
//! storefront-pages submit        --name Ann --email ann@example.com
//! storefront-pages products
//! storefront-pages dom-bench     --strategy both
//! storefront-pages dedup-bench   --sizes 100,1000
//! storefront-pages clock         --timestamp 1672531199
//! ```

pub mod bench;
pub mod cart;
pub mod clock;
pub mod form;
pub mod products;

use clap::Subcommand;

pub use bench::{dedup_bench, dom_bench, Strategy};
pub use cart::{run_cart, CartEvent};
pub use clock::show_clock;
pub use form::submit_form;
pub use products::load_products;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Replay cart events read from stdin (type N, plus, minus, blur, add)
    Cart,

    /// Validate and submit the name/email form
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Load and list the product catalogue
    Products,

    /// Time one-by-one appends against a single markup write
    DomBench {
        #[arg(long, value_enum, default_value = "both")]
        strategy: Strategy,

        /// Elements per run
        #[arg(long)]
        count: Option<usize>,
    },

    /// Compare naive and hash-set deduplication
    DedupBench {
        /// Comma-separated input sizes
        #[arg(long, value_parser = parse_sizes_arg)]
        sizes: Option<SizeList>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show a Unix timestamp (default: now) as local time
    Clock {
        #[arg(long)]
        timestamp: Option<i64>,
    },
}

impl Command {
    /// True for the commands that talk to the backend.
    pub fn needs_api(&self) -> bool {
        matches!(self, Command::Submit { .. } | Command::Products)
    }
}

/// Parsed `--sizes` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeList(pub Vec<usize>);

fn parse_sizes_arg(raw: &str) -> Result<SizeList, String> {
    crate::state::config::parse_sizes(raw)
        .map(SizeList)
        .ok_or_else(|| format!("expected comma-separated sizes, got '{}'", raw))
}
