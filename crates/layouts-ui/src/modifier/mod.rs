//! Single-child layout modifiers and the node that applies them.

mod baseline;
mod padding;

pub use baseline::FirstBaselineToTop;
pub use padding::{EdgeInsets, Padding};

use layouts_core::{
    Constraints, LayoutError, LayoutModifier, Measurable, MeasureResult, MeasuredChild,
};

/// Measurable content wrapped by a [`LayoutModifier`].
pub struct ModifiedNode {
    modifier: Box<dyn LayoutModifier>,
    content: Box<dyn Measurable>,
}

impl ModifiedNode {
    pub fn new(
        modifier: impl LayoutModifier + 'static,
        content: impl Measurable + 'static,
    ) -> Self {
        Self {
            modifier: Box::new(modifier),
            content: Box::new(content),
        }
    }

    /// Runs the modifier and returns its size and the content placement.
    pub fn measure_root(&self, constraints: Constraints) -> Result<MeasureResult, LayoutError> {
        self.modifier.measure(self.content.as_ref(), constraints)
    }
}

impl Measurable for ModifiedNode {
    fn measure(&self, constraints: Constraints) -> Result<MeasuredChild, LayoutError> {
        let result = self.measure_root(constraints)?;
        Ok(MeasuredChild::from(&result))
    }
}

impl std::fmt::Debug for ModifiedNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifiedNode").finish_non_exhaustive()
    }
}

/// Builder methods that wrap any measurable in a modifier.
pub trait MeasurableExt: Measurable + Sized + 'static {
    /// Shifts the content so its first baseline sits `target` pixels below the top.
    fn first_baseline_to_top(self, target: i32) -> ModifiedNode {
        ModifiedNode::new(FirstBaselineToTop::new(target), self)
    }

    fn padding(self, insets: EdgeInsets) -> ModifiedNode {
        ModifiedNode::new(Padding::new(insets), self)
    }

    fn boxed(self) -> Box<dyn Measurable> {
        Box::new(self)
    }
}

impl<M: Measurable + 'static> MeasurableExt for M {}
