use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{debug, LevelFilter};

use maxpfx::cli::{run, Args};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let (maxpfx_level, other_level) = match args.verbose {
        0 => (LevelFilter::Info, LevelFilter::Warn),
        1 => (LevelFilter::Debug, LevelFilter::Warn),
        2 => (LevelFilter::Trace, LevelFilter::Warn),
        _ => (LevelFilter::Trace, LevelFilter::Trace),
    };
    Builder::new()
        .filter(Some("maxpfx"), maxpfx_level)
        .filter(None, other_level)
        .init();
    debug!("Logging at levels {}/{}", maxpfx_level, other_level);

    if !run(&args).await {
        process::exit(1);
    }
}
