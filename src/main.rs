//! txtdocx CLI: `convert` text files to .docx, `unite` zip archives into JSON.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use txtdocx::engine::arg_parser::Cli;
use txtdocx::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
