use crate::error::{Error, Result};

/// Min, max, mean and median of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Sorts `numbers` ascending in natural numeric order.
///
/// Uses [`f64::total_cmp`], so `-0.0` sorts before `0.0` and NaN sorts last.
pub fn sort_ascending(numbers: &mut [f64]) {
    numbers.sort_unstable_by(f64::total_cmp);
}

/// Arithmetic mean of `numbers`, or `None` if empty.
pub fn mean(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Median of an already sorted slice, or `None` if empty.
///
/// Even lengths average the two middle elements.
///
/// # Examples
///
/// ```
/// use seqstats::math::statistics::median_of_sorted;
///
/// assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// ```
pub fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2] + sorted[n / 2 - 1]) / 2.0)
    }
}

/// Reduces a slice sorted by [`sort_ascending`] to its [`Summary`].
///
/// # Errors
///
/// Returns [`Error::NoData`] if `sorted` is empty.
///
/// # Examples
///
/// ```
/// use seqstats::math::statistics::{sort_ascending, summarize_sorted};
///
/// let mut data = vec![4.0, 1.0, 3.0, 2.0];
/// sort_ascending(&mut data);
/// let summary = summarize_sorted(&data).unwrap();
/// assert_eq!(summary.min, 1.0);
/// assert_eq!(summary.max, 4.0);
/// assert_eq!(summary.mean, 2.5);
/// assert_eq!(summary.median, 2.5);
/// ```
pub fn summarize_sorted(sorted: &[f64]) -> Result<Summary> {
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Err(Error::NoData);
    };
    let mean = mean(sorted).ok_or(Error::NoData)?;
    let median = median_of_sorted(sorted).ok_or(Error::NoData)?;
    debug_assert!(sorted.windows(2).all(|w| w[0].total_cmp(&w[1]).is_le()));

    Ok(Summary {
        min,
        max,
        mean,
        median,
    })
}
