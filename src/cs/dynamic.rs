pub mod longest_monotonic_subsequence;

pub use longest_monotonic_subsequence::{
    longest_decreasing_sequence, longest_increasing_sequence, longest_monotonic_subsequence,
    longest_monotonic_subsequence_length, round_half_up, Direction,
};
