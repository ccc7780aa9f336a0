use clap::Parser;
use onion_lib::cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    Ok(onion_lib::run(cli).await?)
}
