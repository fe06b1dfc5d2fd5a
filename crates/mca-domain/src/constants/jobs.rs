//! Job bookkeeping constants.

/// Maximum number of terminal jobs retained in the history ring.
///
/// When the ring is full, the oldest entry is evicted on each append.
pub const JOB_HISTORY_CAPACITY: usize = 100;
