//! # Storefront Pages Entry Point
//!
//! ```text
//! main.rs ────► storefront_pages::run()
//!                  ├── parse CLI (clap)
//!                  ├── init tracing
//!                  └── run one page command on a current-thread runtime
//! ```

fn main() -> anyhow::Result<()> {
    storefront_pages::run()
}
