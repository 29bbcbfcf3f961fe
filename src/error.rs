//! Input-validation errors.
//!
//! The enumeration functions reject arguments for which no meaningful
//! search exists. An in-range search that simply finds nothing is *not*
//! an error; it returns an empty result.

/// Errors returned by [`crate::triplet::range`] and [`crate::triplet::sum`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The side range is empty or starts at zero.
    ///
    /// Triplet sides are positive, so `min` must be at least 1 and must
    /// not exceed `max`.
    #[error("invalid side range: min {min}, max {max} (require 1 <= min <= max)")]
    InvalidRange {
        /// Requested lower bound on the smallest side.
        min: u64,
        /// Requested upper bound on the largest side.
        max: u64,
    },

    /// The target perimeter is zero.
    ///
    /// Perimeters below 12 (the smallest possible, from (3, 4, 5)) are
    /// accepted and yield an empty result; only 0 is rejected.
    #[error("invalid perimeter: {perimeter} (require at least 1)")]
    InvalidPerimeter {
        /// Requested perimeter.
        perimeter: u64,
    },
}
