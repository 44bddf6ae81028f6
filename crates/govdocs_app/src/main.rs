mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::config::Args::parse();
    platform::run_app(args)
}
