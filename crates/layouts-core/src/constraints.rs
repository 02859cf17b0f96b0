//! Layout constraints system

use crate::axis::Axis;
use crate::error::LayoutError;
use crate::geometry::IntSize;
use crate::solver::{self, InvalidRange};

/// Constraints used during layout measurement.
///
/// Fields are public so hosts can build envelopes directly; every layout
/// validates the envelope it receives before measuring any child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Constraints {
    /// Marker for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    /// Creates validated constraints.
    pub fn new(
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    ) -> Result<Self, LayoutError> {
        let constraints = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Creates constraints with exact width and height.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Constraints that accept any size.
    pub fn unbounded() -> Self {
        Self::loose(Self::INFINITY, Self::INFINITY)
    }

    /// Checks that every bound is non-negative and `min <= max` on both axes.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let (min, max) = self.bounds(axis);
            if min < 0 {
                return Err(LayoutError::NegativeConstraint { axis, value: min });
            }
            if max < 0 {
                return Err(LayoutError::NegativeConstraint { axis, value: max });
            }
            if min > max {
                return Err(LayoutError::invalid_range(axis, InvalidRange { min, max }));
            }
        }
        Ok(())
    }

    /// Returns the `(min, max)` pair for `axis`.
    pub fn bounds(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::Horizontal => (self.min_width, self.max_width),
            Axis::Vertical => (self.min_height, self.max_height),
        }
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Returns true if `size` fits inside these constraints.
    pub fn contains(&self, size: IntSize) -> bool {
        (self.min_width..=self.max_width).contains(&size.width)
            && (self.min_height..=self.max_height).contains(&size.height)
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: i32, height: i32) -> Result<IntSize, LayoutError> {
        solver::clamp_size(width, height, self)
    }

    /// Shrinks the constraints by fixed insets, never dropping below zero.
    /// Unbounded maxima stay unbounded.
    pub fn deflate(&self, horizontal: i32, vertical: i32) -> Self {
        let shrink = |value: i32, by: i32| {
            if value == Self::INFINITY {
                value
            } else {
                value.saturating_sub(by).max(0)
            }
        };
        Self {
            min_width: shrink(self.min_width, horizontal),
            max_width: shrink(self.max_width, horizontal),
            min_height: shrink(self.min_height, vertical),
            max_height: shrink(self.max_height, vertical),
        }
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
