pub mod statistics;

pub use statistics::{sort_ascending, summarize_sorted, Summary};
