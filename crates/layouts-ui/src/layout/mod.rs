pub mod policies;

use layouts_core::{
    Constraints, LayoutError, Measurable, MeasurePolicy, MeasureResult, MeasuredChild,
};

/// Node that lays out its children with a [`MeasurePolicy`].
///
/// A `Layout` is itself [`Measurable`], so layouts nest: an outer policy
/// sees only the inner layout's size and first baseline.
pub struct Layout {
    policy: Box<dyn MeasurePolicy>,
    children: Vec<Box<dyn Measurable>>,
}

impl Layout {
    pub fn new(policy: impl MeasurePolicy + 'static, children: Vec<Box<dyn Measurable>>) -> Self {
        Self {
            policy: Box::new(policy),
            children,
        }
    }

    pub fn children(&self) -> &[Box<dyn Measurable>] {
        &self.children
    }

    /// Runs a full pass and returns the size plus every child placement.
    pub fn measure_root(&self, constraints: Constraints) -> Result<MeasureResult, LayoutError> {
        let result = self.policy.measure(&self.children, constraints)?;
        log::debug!(
            "layout pass resolved {}x{} for {} children",
            result.size.width,
            result.size.height,
            result.placements.len()
        );
        Ok(result)
    }
}

impl Measurable for Layout {
    fn measure(&self, constraints: Constraints) -> Result<MeasuredChild, LayoutError> {
        let result = self.policy.measure(&self.children, constraints)?;
        Ok(MeasuredChild::from(&result))
    }
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout")
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
