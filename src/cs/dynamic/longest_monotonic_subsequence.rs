use crate::error::{Error, Result};

/// Which ordering a subsequence must follow.
///
/// The two directions are deliberately asymmetric: `Increasing` continues a
/// subsequence only with a strictly larger value, while `Decreasing` continues
/// it with any value that is less than *or equal to* the current tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Whether `tail` may be followed by `value` in a subsequence of this direction.
    #[inline]
    fn extends(self, tail: f64, value: f64) -> bool {
        match self {
            Direction::Increasing => tail < value,
            Direction::Decreasing => tail >= value,
        }
    }

    /// Whether the rounded first input value belongs in front of `head`.
    #[inline]
    fn precedes(self, first: i64, head: i64) -> bool {
        match self {
            Direction::Increasing => head > first,
            Direction::Decreasing => head < first,
        }
    }
}

/// Rounds to the nearest integer, with ties going toward positive infinity.
///
/// NaN becomes 0 and values outside the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use seqstats::cs::dynamic::longest_monotonic_subsequence::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(-2.6), -3);
/// ```
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    // x - floor(x) is exact for every finite double
    if x - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}

/// Length of the tail array's binary search for `numbers[i]`: one past the
/// largest `k` in `1..=best` whose tail still extends into `numbers[i]`.
#[inline]
fn prefix_length(
    numbers: &[f64],
    indices: &[usize],
    best: usize,
    value: f64,
    direction: Direction,
) -> usize {
    let mut left = 1;
    let mut right = best;
    while left <= right {
        let mid = (left + right) / 2;
        if direction.extends(numbers[indices[mid]], value) {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    left
}

/// Returns the length of the longest monotonic subsequence of `numbers`.
///
/// Runs the same scan as [`longest_monotonic_subsequence`] without recording
/// predecessors. Empty input has length 0.
///
/// # Examples
///
/// ```
/// use seqstats::cs::dynamic::longest_monotonic_subsequence::{
///     longest_monotonic_subsequence_length, Direction,
/// };
///
/// let arr = [10.0, 9.0, 2.0, 5.0, 3.0, 7.0, 101.0, 18.0];
/// assert_eq!(longest_monotonic_subsequence_length(&arr, Direction::Increasing), 4);
/// assert_eq!(longest_monotonic_subsequence_length(&[4.0, 4.0, 4.0], Direction::Decreasing), 3);
/// ```
pub fn longest_monotonic_subsequence_length(numbers: &[f64], direction: Direction) -> usize {
    let mut indices = vec![0_usize; numbers.len() + 1];
    let mut best = 0_usize;

    for (i, &value) in numbers.iter().enumerate() {
        let len = prefix_length(numbers, &indices, best, value, direction);
        indices[len] = i;
        best = best.max(len);
    }
    best
}

/// Returns one longest monotonic subsequence of `numbers`, rounded to integers.
///
/// This is the patience-sorting scan: `indices[k]` holds the position of the
/// last element of the best subsequence of length `k` seen so far and every
/// position records its predecessor when it is placed. Comparisons use the
/// original floating-point values; only the returned values are rounded, with
/// [`round_half_up`].
///
/// Position 0 doubles as the "no predecessor" marker, so backtracking stops
/// before ever emitting it. The first input value is therefore prepended
/// afterwards whenever it still fits in front of the reconstructed head. The
/// result can differ from a textbook LIS in ties; it is reproduced exactly.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use seqstats::cs::dynamic::longest_monotonic_subsequence::{
///     longest_monotonic_subsequence, Direction,
/// };
///
/// let arr = [5.0, 4.0, 3.0, 2.0, 1.0];
/// let seq = longest_monotonic_subsequence(&arr, Direction::Decreasing).unwrap();
/// assert_eq!(seq, vec![5, 4, 3, 2, 1]);
///
/// let seq = longest_monotonic_subsequence(&[100.0, 1.0, 2.0, 3.0], Direction::Increasing).unwrap();
/// assert_eq!(seq, vec![1, 2, 3]);
/// ```
pub fn longest_monotonic_subsequence(numbers: &[f64], direction: Direction) -> Result<Vec<i64>> {
    match numbers {
        [] => return Err(Error::EmptySequence),
        [only] => return Ok(vec![round_half_up(*only)]),
        _ => {}
    }

    let n = numbers.len();
    let mut indices = vec![0_usize; n + 1];
    let mut predecessors = vec![0_usize; n];
    let mut best = 0_usize;

    for (i, &value) in numbers.iter().enumerate() {
        let len = prefix_length(numbers, &indices, best, value, direction);

        predecessors[i] = indices[len - 1];
        indices[len] = i;

        if len > best {
            best = len;
        }
    }

    let mut seq = Vec::with_capacity(best + 1);
    let mut index = indices[best];
    while index != 0 {
        seq.push(round_half_up(numbers[index]));
        index = predecessors[index];
    }
    seq.reverse();

    let first = round_half_up(numbers[0]);
    match seq.first() {
        Some(&head) if !direction.precedes(first, head) => {}
        _ => seq.insert(0, first),
    }

    Ok(seq)
}

/// Longest strictly increasing subsequence of `numbers`, rounded to integers.
///
/// # Examples
///
/// ```
/// use seqstats::cs::dynamic::longest_monotonic_subsequence::longest_increasing_sequence;
///
/// let seq = longest_increasing_sequence(&[1.0, 3.0, 2.0, 4.0]).unwrap();
/// assert_eq!(seq, vec![1, 2, 4]);
/// ```
pub fn longest_increasing_sequence(numbers: &[f64]) -> Result<Vec<i64>> {
    longest_monotonic_subsequence(numbers, Direction::Increasing)
}

/// Longest subsequence of `numbers` in which each value is at most the one before it.
pub fn longest_decreasing_sequence(numbers: &[f64]) -> Result<Vec<i64>> {
    longest_monotonic_subsequence(numbers, Direction::Decreasing)
}
