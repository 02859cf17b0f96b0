//! Failure taxonomy for layout passes.

use thiserror::Error;

use crate::axis::Axis;
use crate::solver::InvalidRange;

/// Reasons a layout pass can fail. A failed pass produces no geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid {axis} constraints")]
    InvalidConstraint {
        axis: Axis,
        #[source]
        source: InvalidRange,
    },
    #[error("{axis} bound {value} is negative")]
    NegativeConstraint { axis: Axis, value: i32 },
    #[error("measured child does not expose a first baseline")]
    MissingBaseline,
    #[error("staggered grid needs at least one row")]
    NoRows,
    #[error("padding inset {inset} is negative")]
    NegativeInset { inset: i32 },
    #[error("baseline target {target} is negative")]
    NegativeBaselineTarget { target: i32 },
}

impl LayoutError {
    pub(crate) fn invalid_range(axis: Axis, source: InvalidRange) -> Self {
        LayoutError::InvalidConstraint { axis, source }
    }
}
