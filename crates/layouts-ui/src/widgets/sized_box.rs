use layouts_core::{Constraints, LayoutError, Measurable, MeasuredChild};

/// Box with a fixed preferred size and no baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizedBox {
    pub width: i32,
    pub height: i32,
}

impl SizedBox {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Measurable for SizedBox {
    fn measure(&self, constraints: Constraints) -> Result<MeasuredChild, LayoutError> {
        let size = constraints.constrain(self.width, self.height)?;
        Ok(MeasuredChild::new(size.width, size.height))
    }
}
