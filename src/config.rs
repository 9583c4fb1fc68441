use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Settings for a single run over one input file.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "seqstats",
    version,
    about = "Summary statistics and longest monotonic subsequences of a numeric file"
)]
pub struct Config {
    /// File holding one number per line
    #[arg(value_name = "INPUT", default_value = "10m.txt")]
    pub input: PathBuf,

    /// Compute the increasing and decreasing subsequences concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Log more; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            parallel: false,
            verbose: 0,
            quiet: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Maximum log level implied by `--quiet` and `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Logger writing to stderr at [`Config::log_level`]; `RUST_LOG` directives
    /// are applied on top.
    pub fn logger(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(self.log_level())
            .format_timestamp(None)
            .parse_default_env();
        builder
    }
}
