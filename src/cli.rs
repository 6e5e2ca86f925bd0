//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "secstats")]
#[command(about = "Security bug triage statistics collector", version)]
pub(crate) struct Cli {
    /// Print INSERT statements instead of writing to the results store,
    /// and keep JSON artifacts in a scratch directory
    #[arg(long)]
    pub(crate) debug: bool,

    /// Config file path (overrides the default search locations)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,
}
