use crate::config::Preset;
use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for makeproj.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of your project (prompted if absent).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Which language your project is in (prompted if absent).
    #[arg(short, long, value_enum)]
    pub lang: Option<Preset>,

    /// Destination directory; defaults to ./<name>. Must not exist yet.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
