mod actions;
mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    actions::handle(args)
}
