use clap::Parser;
use wx_ingest::cli::{run, Cli};
use wx_ingest::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
