pub mod config;
pub mod cs;
pub mod error;
pub mod input;
pub mod math;
pub mod report;

pub use config::Config;
pub use cs::dynamic;
pub use error::{Error, Result, Stage};
pub use report::{analyze, run, Report};
