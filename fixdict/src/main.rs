use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    cli::init_logging(args.log_json);
    cli::run(&args)
}
