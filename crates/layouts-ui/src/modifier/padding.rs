use layouts_core::{
    Constraints, LayoutError, LayoutModifier, Measurable, MeasureResult, Placement,
};

/// Insets on each edge, in pixels. Negative insets are rejected when the
/// padding is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub fn uniform(all: i32) -> Self {
        Self::each(all, all, all, all)
    }

    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::each(horizontal, vertical, horizontal, vertical)
    }

    pub fn each(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_sum(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical_sum(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Checks that no edge is negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match [self.left, self.top, self.right, self.bottom]
            .into_iter()
            .find(|inset| *inset < 0)
        {
            Some(inset) => Err(LayoutError::NegativeInset { inset }),
            None => Ok(()),
        }
    }
}

/// Adds space around the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    insets: EdgeInsets,
}

impl Padding {
    pub fn new(insets: EdgeInsets) -> Self {
        Self { insets }
    }
}

impl LayoutModifier for Padding {
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        constraints.validate()?;
        self.insets.validate()?;
        let horizontal = self.insets.horizontal_sum();
        let vertical = self.insets.vertical_sum();

        let inner = constraints.deflate(horizontal, vertical);
        let child = measurable.measure(inner)?;

        let size = constraints.constrain(
            child.width.saturating_add(horizontal),
            child.height.saturating_add(vertical),
        )?;
        let baseline = child
            .first_baseline
            .map(|baseline| baseline.saturating_add(self.insets.top));

        Ok(MeasureResult::new(
            size,
            vec![Placement::new(0, self.insets.left, self.insets.top)],
        )
        .with_first_baseline(baseline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layouts_core::IntSize;
    use layouts_testing::FakeMeasurable;

    #[test]
    fn adds_insets_around_child() {
        let child = FakeMeasurable::new(30, 10);
        let result = Padding::new(EdgeInsets::each(1, 2, 3, 4))
            .measure(&child, Constraints::loose(100, 100))
            .unwrap();

        assert_eq!(result.size, IntSize::new(34, 16));
        assert_eq!(result.placements, vec![Placement::new(0, 1, 2)]);
    }

    #[test]
    fn child_sees_deflated_constraints() {
        let child = FakeMeasurable::new(300, 10);
        let result = Padding::new(EdgeInsets::uniform(8))
            .measure(&child, Constraints::loose(100, 100))
            .unwrap();

        assert_eq!(child.recorded_constraints(), vec![Constraints::loose(84, 84)]);
        assert_eq!(result.size, IntSize::new(100, 26));
    }

    #[test]
    fn shifts_child_baseline_by_top_inset() {
        let child = FakeMeasurable::with_baseline(30, 20, 15);
        let result = Padding::new(EdgeInsets::symmetric(8, 4))
            .measure(&child, Constraints::unbounded())
            .unwrap();

        assert_eq!(result.first_baseline, Some(19));
    }

    #[test]
    fn large_baseline_saturates() {
        let child = FakeMeasurable::with_baseline(10, 10, i32::MAX - 2);
        let result = Padding::new(EdgeInsets::uniform(8))
            .measure(&child, Constraints::unbounded())
            .unwrap();

        assert_eq!(result.first_baseline, Some(i32::MAX));
    }

    #[test]
    fn inset_sums_saturate() {
        let insets = EdgeInsets::each(i32::MAX, i32::MAX, 1, 1);
        assert_eq!(insets.horizontal_sum(), i32::MAX);
        assert_eq!(insets.vertical_sum(), i32::MAX);
    }

    #[test]
    fn negative_insets_are_rejected_before_measuring() {
        let child = FakeMeasurable::new(30, 10);
        let err = Padding::new(EdgeInsets::each(0, -4, 0, 0))
            .measure(&child, Constraints::loose(100, 100))
            .unwrap_err();

        assert_eq!(err, LayoutError::NegativeInset { inset: -4 });
        assert_eq!(child.measure_count(), 0);
    }
}
