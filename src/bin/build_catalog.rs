//! Convert a directory of images into an `.xcassets` catalog of 1x1
//! placeholders.
//!
//! Usage:
//!   build-catalog <input_dir> <output_xcassets>

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use placeholder_catalog::build_catalog;
use std::path::PathBuf;

const USAGE: &str = "Usage: build-catalog <input_dir> <output_xcassets>";

#[derive(Parser, Debug)]
#[command(name = "build-catalog")]
#[command(about = "Build an .xcassets catalog of 1x1 placeholder images")]
struct Cli {
    /// Directory searched recursively for .png, .jpg, .jpeg and .pdf files.
    input_dir: PathBuf,
    /// Catalog directory to create; any existing contents are deleted.
    output_xcassets: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = parse_cli();
    build_catalog(&cli.input_dir, &cli.output_xcassets)
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => usage_and_exit(),
    }
}

fn usage_and_exit() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}
