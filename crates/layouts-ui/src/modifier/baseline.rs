use layouts_core::{
    Constraints, IntSize, LayoutError, LayoutModifier, Measurable, MeasureResult, Placement,
};

/// Places the content so its first baseline lands `target` pixels below the
/// top edge, padding above it as needed.
///
/// The padding may be negative when the content's baseline already sits
/// lower than `target`; the content is then shifted up and the wrapper is
/// shorter than the content. The resolved height is not clamped into the
/// incoming constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstBaselineToTop {
    target: i32,
}

impl FirstBaselineToTop {
    pub fn new(target: i32) -> Self {
        Self { target }
    }

    pub fn target(&self) -> i32 {
        self.target
    }
}

impl LayoutModifier for FirstBaselineToTop {
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        if self.target < 0 {
            return Err(LayoutError::NegativeBaselineTarget {
                target: self.target,
            });
        }
        constraints.validate()?;

        let child = measurable.measure(constraints)?;
        let baseline = child.first_baseline.ok_or(LayoutError::MissingBaseline)?;

        let top_padding = self.target.saturating_sub(baseline);
        let height = child.height.saturating_add(top_padding);
        log::trace!(
            "baseline {baseline} -> target {}: top padding {top_padding}",
            self.target
        );

        let placements = vec![Placement::new(0, 0, top_padding)];
        Ok(MeasureResult::new(IntSize::new(child.width, height), placements)
            .with_first_baseline(Some(self.target)))
    }
}
