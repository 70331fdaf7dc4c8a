use anyhow::Result;
use clap::Parser;
use fakenews::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(&cli);
    cli::run(&cli)
}
