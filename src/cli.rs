use clap::Parser;
use std::path::PathBuf;

use apk_deps::application::dto::OutputFormat;

/// Resolve the dependencies of an Alpine package from an APKINDEX
#[derive(Parser, Debug)]
#[command(name = "apk-deps")]
#[command(version)]
#[command(
    about = "Resolve direct and transitive dependencies of an Alpine package from an APKINDEX",
    long_about = None
)]
pub struct Args {
    /// Path to the CSV configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
