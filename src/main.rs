//! Entry point: parse CLI, load the env file, and run the playoff report.

use clap::Parser;
use espn_playoffs::{cli::PlayoffReport, commands::report::handle_report, Result};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = PlayoffReport::parse();

    match &cli.env_file {
        Some(path) => {
            dotenv::from_path(path)?;
        }
        None => {
            // Optional: public leagues can run on CLI flags alone
            dotenv::dotenv().ok();
        }
    }

    handle_report(cli).await
}
