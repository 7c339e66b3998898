//! omnibar - interactive search input that answers or searches
//!
//! Command-line usage:
//!   omnibar                      - interactive TUI
//!   omnibar "query"              - one-shot evaluation (mode + results)
//!   omnibar --classify "query"   - classifier verdict only
//!   omnibar --json "query"       - machine-readable output

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    omnibar::cli::run_cli().await
}
