use std::fmt;
use std::num::ParseFloatError;

use thiserror::Error;

/// The stage of a run an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Subsequence,
    Statistics,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Subsequence => "subsequence",
            Stage::Statistics => "statistics",
        };
        f.write_str(name)
    }
}

/// Errors produced while loading, reducing, or scanning a numeric sequence.
#[derive(Debug, Error)]
pub enum Error {
    #[error("load: line {line}: `{text}` is not a number")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("subsequence: input sequence is empty")]
    EmptySequence,

    #[error("statistics: input sequence is empty")]
    NoData,
}

impl Error {
    /// Which stage of the run failed.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Parse { .. } => Stage::Load,
            Error::EmptySequence => Stage::Subsequence,
            Error::NoData => Stage::Statistics,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_each_variant() {
        let parse = "x".parse::<f64>().unwrap_err();
        let err = Error::Parse {
            line: 3,
            text: "x".to_string(),
            source: parse,
        };
        assert_eq!(err.stage(), Stage::Load);
        assert_eq!(Error::EmptySequence.stage(), Stage::Subsequence);
        assert_eq!(Error::NoData.stage(), Stage::Statistics);
    }

    #[test]
    fn test_display_names_stage() {
        assert!(Error::EmptySequence.to_string().starts_with("subsequence:"));
        assert!(Error::NoData.to_string().starts_with("statistics:"));
        assert_eq!(Stage::Load.to_string(), "load");
    }
}
