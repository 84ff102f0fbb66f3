//! Sample grids.

/// Evenly spaced sample points `start + i * step` for `i in 0..count`.
///
/// Points are computed from the index rather than accumulated, so the last
/// column of a wide viewport lands where the viewport says it does.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sweep {
    pub start: f64,
    pub step: f64,
    pub count: usize,
}

impl Sweep {
    pub fn new(start: f64, step: f64, count: usize) -> Self {
        Sweep { start, step, count }
    }

    /// `count` points from `from` to `to`, both ends included.
    pub fn over(from: f64, to: f64, count: usize) -> Self {
        let step = if count > 1 {
            (to - from) / (count - 1) as f64
        } else {
            0.0
        };
        Sweep::new(from, step, count)
    }

    #[inline]
    pub fn at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> {
        let sweep = *self;
        (0..sweep.count).map(move |i| sweep.at(i))
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
