//! Rolling energy history for plotting
//!
//! Keeps the last `capacity` display samples in a FIFO and tracks the range
//! of every sample ever pushed, so the plot can be rescaled without the
//! range collapsing when extremes scroll out of view.

use std::collections::VecDeque;

use crate::solvers::{PendulumError, Result};

/// Bounded FIFO of display samples with all-time min/max
///
/// # Example
///
/// ```
/// use pendsim::EnergyHistory;
///
/// let mut history = EnergyHistory::new(3);
/// for v in [5.0, 1.0, 4.0, 2.0] {
///     history.push(v);
/// }
/// assert_eq!(history.snapshot(), vec![1.0, 4.0, 2.0]);
/// assert_eq!(history.min_seen(), Some(1.0));
/// assert_eq!(history.max_seen(), Some(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct EnergyHistory {
    samples: VecDeque<f64>,
    capacity: usize,
    min_seen: f64,
    max_seen: f64,
}

impl EnergyHistory {
    /// Create an empty history holding at most `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Sessions reject a zero `plot_width`
    /// before building one.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be positive");

        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            min_seen: f64::INFINITY,
            max_seen: f64::NEG_INFINITY,
        }
    }

    /// Append a sample, evicting the oldest one when full
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);

        // f64::min/max skip NaN
        self.min_seen = self.min_seen.min(value);
        self.max_seen = self.max_seen.max(value);
    }

    /// Retained samples, oldest first
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// Iterate over retained samples, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Most recent sample
    pub fn last(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Smallest sample ever pushed since creation or the last [`clear`](Self::clear)
    pub fn min_seen(&self) -> Option<f64> {
        self.range().map(|(lo, _)| lo)
    }

    /// Largest sample ever pushed since creation or the last [`clear`](Self::clear)
    pub fn max_seen(&self) -> Option<f64> {
        self.range().map(|(_, hi)| hi)
    }

    /// `(min_seen, max_seen)`, or `None` before any finite sample
    pub fn range(&self) -> Option<(f64, f64)> {
        (self.min_seen <= self.max_seen).then_some((self.min_seen, self.max_seen))
    }

    /// Drop all samples and forget the tracked range
    pub fn clear(&mut self) {
        self.samples.clear();
        self.min_seen = f64::INFINITY;
        self.max_seen = f64::NEG_INFINITY;
    }

    /// Retained samples remapped from `[min_seen, max_seen]` onto
    /// `[min_dst, max_dst]`
    pub fn normalized(&self, min_dst: f64, max_dst: f64) -> Vec<f64> {
        match self.range() {
            Some((lo, hi)) => self
                .iter()
                .map(|x| normalize(x, lo, hi, min_dst, max_dst))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Plotted value of a total energy: `plot_height − total / scale`
pub fn display_sample(total: f64, plot_height: f64, scale: f64) -> f64 {
    plot_height - total / scale
}

/// Affine map of `x` from `[min_src, max_src]` onto `[min_dst, max_dst]`
///
/// Fails with [`PendulumError::DegenerateNormalization`] when the source
/// range is empty.
pub fn try_normalize(x: f64, min_src: f64, max_src: f64, min_dst: f64, max_dst: f64) -> Result<f64> {
    if max_src == min_src {
        return Err(PendulumError::DegenerateNormalization { value: x });
    }
    Ok(min_dst + (x - min_src) / (max_src - min_src) * (max_dst - min_dst))
}

/// Like [`try_normalize`], but maps everything onto the midpoint of the
/// destination range when the source range is empty
pub fn normalize(x: f64, min_src: f64, max_src: f64, min_dst: f64, max_dst: f64) -> f64 {
    try_normalize(x, min_src, max_src, min_dst, max_dst).unwrap_or_else(|err| {
        log::trace!("{}; using midpoint", err);
        (min_dst + max_dst) / 2.0
    })
}
