use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Batch-convert plain-text files to .docx, or merge zip archives into one JSON corpus.
#[derive(Clone, Debug, Parser)]
#[command(name = "txtdocx")]
#[command(about = "Convert .txt files to .docx in parallel; merge .zip archives into JSON.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Convert every text file in the input directory to a .docx document.
    Convert(ConvertArgs),
    /// Merge the text of every .zip archive in the input directory into one JSON file.
    Unite(UniteArgs),
}

/// Options shared by every subcommand. Unset values come from the config file, then defaults.
#[derive(Clone, Debug, Args)]
pub struct CommonArgs {
    /// Input directory. Default: `novel`.
    #[arg(long, short = 'i', value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Output directory, created if missing. Default: `output`.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Config file. Default: `.txtdocx.toml` in the current directory, if present.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

#[derive(Clone, Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Worker pool size. Default: number of available cores.
    #[arg(long, short = 'j', value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: Option<u16>,

    /// Extension of the files to convert (case-sensitive). Default: `txt`.
    #[arg(long, value_name = "EXT")]
    pub input_ext: Option<String>,

    /// Extension given to each output document. Default: `docx`.
    #[arg(long, value_name = "EXT")]
    pub output_ext: Option<String>,

    /// Show a progress bar while converting.
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub progress: Option<bool>,
}

#[derive(Clone, Debug, Args)]
pub struct UniteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// File name of the combined JSON inside the output directory. Default: `united.json`.
    #[arg(long, short = 'n', value_name = "FILE")]
    pub name: Option<String>,
}
