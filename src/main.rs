//! Hyprvoice notification CLI entry point

use std::process::ExitCode;

use clap::Parser;

use hyprvoice::cli::{init_tracing, run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    run(cli).await
}
