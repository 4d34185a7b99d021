//! sitemap-hook - write sitemap.xml for a built static site from a page manifest.

use clap::Parser;
use sitemap_hook::{build::run, cli::Cli, log};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}
