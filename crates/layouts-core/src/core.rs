use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::IntSize;

/// Object capable of measuring itself against a constraint envelope.
///
/// Implementations must be deterministic within a pass: layouts measure
/// each child at most once and never cache results across passes.
pub trait Measurable {
    /// Measures the node with the provided constraints.
    fn measure(&self, constraints: Constraints) -> Result<MeasuredChild, LayoutError>;
}

/// Result of measuring a single child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasuredChild {
    pub width: i32,
    pub height: i32,
    /// Distance from the top edge to the first baseline, if the node has one.
    pub first_baseline: Option<i32>,
}

impl MeasuredChild {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            first_baseline: None,
        }
    }

    pub fn with_first_baseline(mut self, baseline: i32) -> Self {
        self.first_baseline = Some(baseline);
        self
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }
}

/// Position of one child relative to its parent's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the child in the sequence handed to the layout.
    pub index: usize,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(index: usize, x: i32, y: i32) -> Self {
        Self { index, x, y }
    }
}

/// Resolved size of a layout plus one placement per child, in index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasureResult {
    pub size: IntSize,
    pub placements: Vec<Placement>,
    /// First baseline the layout exposes to its own parent.
    pub first_baseline: Option<i32>,
}

impl MeasureResult {
    pub fn new(size: IntSize, placements: Vec<Placement>) -> Self {
        Self {
            size,
            placements,
            first_baseline: None,
        }
    }

    pub fn with_first_baseline(mut self, baseline: Option<i32>) -> Self {
        self.first_baseline = baseline;
        self
    }
}

impl From<&MeasureResult> for MeasuredChild {
    fn from(result: &MeasureResult) -> Self {
        Self {
            width: result.size.width,
            height: result.size.height,
            first_baseline: result.first_baseline,
        }
    }
}

/// Policy responsible for measuring and placing a sequence of children.
pub trait MeasurePolicy {
    /// Runs the measurement pass with the provided children and constraints.
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError>;
}

/// Single-child layout that wraps the measurement of its content.
pub trait LayoutModifier {
    /// Measures `measurable` and returns the wrapper's size along with the
    /// child's placement (always index 0).
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError>;
}
