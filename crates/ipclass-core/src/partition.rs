//! Splitting the input into contiguous per-worker chunks.

use std::ops::Range;

/// Get the default worker count: available hardware parallelism, at least 1.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// Split `len` items into `workers` contiguous ranges.
///
/// Every range is `len / workers` long except the last, which also takes the
/// remainder. The ranges cover `0..len` in order with no gaps or overlaps.
/// A worker count of zero is treated as one. When `len < workers` the leading
/// ranges are empty.
#[must_use]
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = len / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { len } else { start + chunk };
            start..end
        })
        .collect()
}

/// Borrow `items` as the chunks produced by [`partition`].
#[must_use]
pub fn chunks<T>(items: &[T], workers: usize) -> Vec<&[T]> {
    partition(items.len(), workers)
        .into_iter()
        .map(|range| &items[range])
        .collect()
}
