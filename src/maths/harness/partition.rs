use core::ops::Range;
use std::vec::Vec;

/// Splits the closed index range `[0, samples]` into `workers` contiguous,
/// disjoint ranges.
///
/// Every range but the last holds `samples / workers` indices; the last one
/// absorbs the remainder and the closed upper bound, so it always ends at
/// `samples + 1`. With more workers than samples the leading ranges are
/// empty. Zero workers, or `samples == u64::MAX` (no representable end),
/// yields no ranges.
pub fn partition(samples: u64, workers: usize) -> Vec<Range<u64>> {
    let Some(closed_end) = samples.checked_add(1) else {
        return Vec::new();
    };
    let per_worker = match workers {
        0 => return Vec::new(),
        w => samples / w as u64,
    };

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0u64;
    for worker in 0..workers {
        let end = if worker + 1 == workers {
            closed_end
        } else {
            start + per_worker
        };
        ranges.push(start..end);
        start = end;
    }
    ranges
}
