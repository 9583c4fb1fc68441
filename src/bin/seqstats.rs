use std::process::ExitCode;

use clap::Parser;
use log::error;

use seqstats::{run, Config};

fn main() -> ExitCode {
    let config = Config::parse();
    config.logger().init();

    match run(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{} stage failed", e.stage());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
