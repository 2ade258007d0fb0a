//! Axis domains and the fold that computes them.
//!
//! The domain is accumulated sample by sample with
//! [`DomainAccumulator::push`], which consumes the accumulator and returns
//! the updated one. Nothing is mutated in place, so the computation can be
//! exercised on its own.
//!
//! # X minimum
//!
//! Charts built by earlier versions of the flamegraph view never lowered the
//! x minimum: it stayed pinned at zero, and the branch meant to lower it
//! wrote into the maximum instead. [`XMinTracking::Legacy`] keeps that
//! behaviour for output parity; [`XMinTracking::Tracked`] records the true
//! smallest elapsed time. Since elapsed times are unsigned, the two only
//! differ when every retained measurement starts after zero.

use serde::{Deserialize, Serialize};

use crate::measurement::Sample;

/// Fraction of the y maximum added as headroom above the tallest point.
pub const Y_HEADROOM: f64 = 0.1;

/// Bounding ranges of all retained samples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Domain {
    /// `[min, max]` elapsed nanoseconds.
    pub x: [u64; 2],
    /// `[min, max]` sample value.
    pub y: [f64; 2],
}

impl Domain {
    /// Returns the domain with `Y_HEADROOM` of the y maximum added to it.
    #[must_use]
    pub fn with_headroom(self) -> Self {
        let [y_min, y_max] = self.y;
        Self {
            x: self.x,
            y: [y_min, y_max + y_max * Y_HEADROOM],
        }
    }

    /// Height of the y range.
    pub fn y_span(&self) -> f64 {
        self.y[1] - self.y[0]
    }
}

/// How the x minimum is maintained while folding samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XMinTracking {
    /// Pin the minimum at zero; a smaller elapsed time overwrites the maximum.
    #[default]
    Legacy,
    /// Track the true smallest elapsed time.
    Tracked,
}

/// Running extents over the samples seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainAccumulator {
    policy: XMinTracking,
    extents: Option<Domain>,
}

impl DomainAccumulator {
    /// Creates an empty accumulator.
    pub const fn new(policy: XMinTracking) -> Self {
        Self {
            policy,
            extents: None,
        }
    }

    /// Folds one sample into the accumulator.
    #[must_use]
    pub fn push(self, sample: &Sample) -> Self {
        let elapsed = sample.elapsed_since_start_ns;
        let value = sample.value;

        let next = match self.extents {
            None => Domain {
                x: match self.policy {
                    XMinTracking::Legacy => [0, elapsed],
                    XMinTracking::Tracked => [elapsed, elapsed],
                },
                y: [value, value],
            },
            Some(Domain {
                x: [x_min, x_max],
                y: [y_min, y_max],
            }) => {
                let y = [y_min.min(value), y_max.max(value)];
                let mut x = [x_min, x_max.max(elapsed)];
                if elapsed < x_min {
                    match self.policy {
                        XMinTracking::Legacy => x[1] = elapsed,
                        XMinTracking::Tracked => x[0] = elapsed,
                    }
                }
                Domain { x, y }
            }
        };

        Self {
            policy: self.policy,
            extents: Some(next),
        }
    }

    /// Folds every sample of a slice into the accumulator.
    #[must_use]
    pub fn extend(self, samples: &[Sample]) -> Self {
        samples.iter().fold(self, Self::push)
    }

    /// Returns `true` if no sample has been folded in.
    pub fn is_empty(&self) -> bool {
        self.extents.is_none()
    }

    /// Finishes the fold. An empty accumulator yields the zero domain.
    pub fn finish(self) -> Domain {
        self.extents.unwrap_or_default()
    }
}
