use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Parses one number per line from `reader`, trimming surrounding whitespace.
///
/// Returns the values in line order. A source that fails mid-read yields an
/// empty sequence, the same as a missing file.
///
/// # Errors
///
/// Returns [`Error::Parse`] with the 1-based line number for the first line
/// that is not a number. Blank lines are not numbers.
pub fn parse_numbers<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut numbers = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("read failed at line {}: {}; continuing with no data", i + 1, e);
                return Ok(Vec::new());
            }
        };
        let text = line.trim();
        let value = text.parse::<f64>().map_err(|source| Error::Parse {
            line: i + 1,
            text: text.to_string(),
            source,
        })?;
        numbers.push(value);
    }
    Ok(numbers)
}

/// Reads the numbers stored one per line in the file at `path`.
///
/// A file that cannot be opened or read yields an empty sequence rather than
/// an error; the cause is only logged.
///
/// # Errors
///
/// Returns [`Error::Parse`] if any line is not a number.
pub fn read_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("cannot open {}: {}; continuing with no data", path.display(), e);
            return Ok(Vec::new());
        }
    };
    let numbers = parse_numbers(BufReader::new(file))?;
    debug!("read {} values from {}", numbers.len(), path.display());
    Ok(numbers)
}
