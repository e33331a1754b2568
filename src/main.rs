use crate::generator::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod generator;
mod llm;
mod memory;
mod search;
mod types;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let input = args.input.clone();
    let config = args.into_config();

    launch(&config, &input).await
}
