use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::Config;
use crate::cs::dynamic::longest_monotonic_subsequence::{
    longest_decreasing_sequence, longest_increasing_sequence,
};
use crate::error::Result;
use crate::input::read_numbers;
use crate::math::statistics::{sort_ascending, summarize_sorted, Summary};

/// Everything a run produces: statistics of the sorted input, both
/// subsequences of the unsorted input, and the wall time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub summary: Summary,
    pub increasing: Vec<i64>,
    pub decreasing: Vec<i64>,
    pub elapsed: Duration,
}

/// Computes a [`Report`] for `numbers`, given in their original order.
///
/// With `parallel` set, the two directions run concurrently on the rayon pool.
/// Statistics are taken over a sorted copy after both subsequences are found.
///
/// # Errors
///
/// Fails with the first error of any stage; nothing partial is returned.
pub fn analyze(numbers: Vec<f64>, parallel: bool) -> Result<Report> {
    let start = Instant::now();

    let (increasing, decreasing) = if parallel {
        let (inc, dec) = rayon::join(
            || longest_increasing_sequence(&numbers),
            || longest_decreasing_sequence(&numbers),
        );
        (inc?, dec?)
    } else {
        (
            longest_increasing_sequence(&numbers)?,
            longest_decreasing_sequence(&numbers)?,
        )
    };
    debug!(
        "subsequences: increasing {} values, decreasing {} values in {:?}",
        increasing.len(),
        decreasing.len(),
        start.elapsed()
    );

    let mut sorted = numbers;
    let sort_start = Instant::now();
    sort_ascending(&mut sorted);
    let summary = summarize_sorted(&sorted)?;
    debug!("statistics over {} values in {:?}", sorted.len(), sort_start.elapsed());

    Ok(Report {
        summary,
        increasing,
        decreasing,
        elapsed: start.elapsed(),
    })
}

/// Loads `config.input` and analyzes it. `elapsed` covers the load as well.
pub fn run(config: &Config) -> Result<Report> {
    let start = Instant::now();
    info!("reading {}", config.input.display());
    let numbers = read_numbers(&config.input)?;
    debug!("loaded {} values in {:?}", numbers.len(), start.elapsed());

    let mut report = analyze(numbers, config.parallel)?;
    report.elapsed = start.elapsed();
    Ok(report)
}

struct Sequence<'a>(&'a [i64]);

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

/// Formats a double the way `Double.toString` does: plain decimal with at
/// least one fractional digit for magnitudes in `[1e-3, 1e7)`, otherwise
/// `d.dddE<exp>`.
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("NaN");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let magnitude = x.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            // Debug keeps a trailing `.0` and stays positional in this range
            return write!(f, "{:?}", x);
        }
        let sci = format!("{:e}", x);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{}E{}", mantissa, exponent)
        } else {
            write!(f, "{}.0E{}", mantissa, exponent)
        }
    }
}

impl fmt::Display for Report {
    /// Min, max and median print truncated toward zero and clamped to the
    /// `i32` range; the mean keeps its fraction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The Max Value: {}", self.summary.max as i32)?;
        writeln!(f, "The Min Value: {}", self.summary.min as i32)?;
        writeln!(f, "The Average Value: {}", Decimal(self.summary.mean))?;
        writeln!(f, "The Median Value: {}", self.summary.median as i32)?;
        writeln!(
            f,
            "The Largest Increasing Sequence {}",
            Sequence(&self.increasing)
        )?;
        writeln!(
            f,
            "The Largest Decreasing Sequence {}",
            Sequence(&self.decreasing)
        )?;
        write!(f, "Time Elapsed: {} seconds", self.elapsed.as_secs())
    }
}
