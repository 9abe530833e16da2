//! CLI command handlers: build options (defaults → config file → flags), then run.

use anyhow::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::engine::arg_parser::{Cli, Commands, CommonArgs, ConvertArgs, UniteArgs};
use crate::utils::setup_logging;
use crate::utils::txtdocx_toml::{
    TxtdocxToml, apply_file_to_convert_opts, apply_file_to_unite_opts, load_txtdocx_toml,
};
use crate::{ConvertOpts, UniteOpts};

/// Build convert options. Flags given on the command line override the config file.
pub fn convert_opts_from(args: &ConvertArgs, file: Option<&TxtdocxToml>) -> ConvertOpts {
    let mut opts = ConvertOpts::default();
    if let Some(file) = file {
        apply_file_to_convert_opts(file, &mut opts);
    }
    apply_common(&args.common, &mut opts.input_dir, &mut opts.output_dir, &mut opts.verbose);
    if let Some(n) = args.workers {
        opts.workers = Some(n as usize);
    }
    if let Some(ref ext) = args.input_ext {
        opts.input_extension = ext.clone();
    }
    if let Some(ref ext) = args.output_ext {
        opts.output_extension = ext.clone();
    }
    if let Some(p) = args.progress {
        opts.progress = p;
    }
    opts
}

/// Build unite options. Flags given on the command line override the config file.
pub fn unite_opts_from(args: &UniteArgs, file: Option<&TxtdocxToml>) -> UniteOpts {
    let mut opts = UniteOpts::default();
    if let Some(file) = file {
        apply_file_to_unite_opts(file, &mut opts);
    }
    apply_common(&args.common, &mut opts.input_dir, &mut opts.output_dir, &mut opts.verbose);
    if let Some(ref name) = args.name {
        opts.output_name = name.clone();
    }
    opts
}

fn apply_common(
    common: &CommonArgs,
    input_dir: &mut PathBuf,
    output_dir: &mut PathBuf,
    verbose: &mut bool,
) {
    if let Some(ref p) = common.input {
        *input_dir = p.clone();
    }
    if let Some(ref p) = common.output {
        *output_dir = p.clone();
    }
    if let Some(v) = common.verbose {
        *verbose = v;
    }
}

/// A config file that exists but cannot be used is reported and ignored.
fn warn_unusable_config(file: &Result<Option<TxtdocxToml>>) {
    if let Err(e) = file {
        warn!("{:#}; using defaults and flags only", e);
    }
}

/// Handle convert command
pub fn handle_convert(args: &ConvertArgs, cwd: &Path) -> Result<()> {
    let file = load_txtdocx_toml(cwd, args.common.config.as_deref());
    let opts = convert_opts_from(args, file.as_ref().ok().and_then(Option::as_ref));
    setup_logging(opts.verbose);
    warn_unusable_config(&file);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    crate::convert_dir::<fn(&crate::RunEvent)>(&opts, None)?;
    Ok(())
}

/// Handle unite command
pub fn handle_unite(args: &UniteArgs, cwd: &Path) -> Result<()> {
    let file = load_txtdocx_toml(cwd, args.common.config.as_deref());
    let opts = unite_opts_from(args, file.as_ref().ok().and_then(Option::as_ref));
    setup_logging(opts.verbose);
    warn_unusable_config(&file);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    crate::unite_dir(&opts)?;
    Ok(())
}

/// Dispatch the parsed command line.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match &cli.command {
        Commands::Convert(args) => handle_convert(args, &cwd),
        Commands::Unite(args) => handle_unite(args, &cwd),
    }
}
