//! Scalar clamping into a `[min, max]` envelope.

use thiserror::Error;

use crate::axis::Axis;
use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::IntSize;

/// A `[min, max]` pair where `min > max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("min {min} exceeds max {max}")]
pub struct InvalidRange {
    pub min: i32,
    pub max: i32,
}

/// Clamps `value` into `[min, max]`.
pub fn clamp(value: i32, min: i32, max: i32) -> Result<i32, InvalidRange> {
    if min > max {
        return Err(InvalidRange { min, max });
    }
    Ok(value.clamp(min, max))
}

/// Clamps `value` into the bounds `constraints` place on `axis`.
pub fn clamp_axis(
    value: i32,
    constraints: &Constraints,
    axis: Axis,
) -> Result<i32, LayoutError> {
    let (min, max) = constraints.bounds(axis);
    clamp(value, min, max).map_err(|err| LayoutError::invalid_range(axis, err))
}

/// Clamps both dimensions of a candidate size.
pub fn clamp_size(
    width: i32,
    height: i32,
    constraints: &Constraints,
) -> Result<IntSize, LayoutError> {
    Ok(IntSize::new(
        clamp_axis(width, constraints, Axis::Horizontal)?,
        clamp_axis(height, constraints, Axis::Vertical)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_raises_values_below_min() {
        assert_eq!(clamp(3, 5, 10), Ok(5));
    }

    #[test]
    fn clamp_lowers_values_above_max() {
        assert_eq!(clamp(42, 5, 10), Ok(10));
    }

    #[test]
    fn clamp_keeps_values_inside_range() {
        assert_eq!(clamp(7, 5, 10), Ok(7));
        assert_eq!(clamp(5, 5, 5), Ok(5));
    }

    #[test]
    fn clamp_rejects_inverted_range() {
        assert_eq!(clamp(7, 50, 40), Err(InvalidRange { min: 50, max: 40 }));
    }

    #[test]
    fn clamp_axis_reports_the_offending_axis() {
        let constraints = Constraints {
            min_width: 0,
            max_width: 100,
            min_height: 30,
            max_height: 20,
        };
        assert_eq!(clamp_axis(500, &constraints, Axis::Horizontal), Ok(100));
        assert_eq!(
            clamp_axis(25, &constraints, Axis::Vertical),
            Err(LayoutError::InvalidConstraint {
                axis: Axis::Vertical,
                source: InvalidRange { min: 30, max: 20 },
            })
        );
    }

    #[test]
    fn clamp_size_resolves_both_axes() {
        let constraints = Constraints::new(10, 20, 10, 20).unwrap();
        assert_eq!(clamp_size(0, 99, &constraints), Ok(IntSize::new(10, 20)));
    }
}
