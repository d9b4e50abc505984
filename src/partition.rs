use std::ops::Range;

/// A half-open index range `[start, end)` into the word list, scanned by
/// exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end:   usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, len)` into `workers` contiguous, disjoint chunks.
///
/// `workers` is clamped to `1..=len`, so no chunk is ever empty when
/// `len > 0`. Every chunk holds `len / workers` indices except the last,
/// which also absorbs the remainder. Returns no chunks for `len == 0`.
pub fn partition(len: usize, workers: usize) -> Vec<Chunk> {
    if len == 0 {
        return Vec::new();
    }

    let workers = workers.clamp(1, len);
    let chunk_size = len / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == workers - 1 { len } else { start + chunk_size };
            Chunk { start, end }
        })
        .collect()
}
