use layouts_core::{Constraints, LayoutError, Measurable, MeasuredChild};

/// Single line of text measured with fixed advance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub const CHAR_WIDTH: i32 = 8;
    pub const LINE_HEIGHT: i32 = 20;
    pub const FIRST_BASELINE: i32 = 15;

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Measurable for Text {
    fn measure(&self, constraints: Constraints) -> Result<MeasuredChild, LayoutError> {
        let chars = i32::try_from(self.text.chars().count()).unwrap_or(i32::MAX);
        let width = chars.saturating_mul(Self::CHAR_WIDTH);
        let size = constraints.constrain(width, Self::LINE_HEIGHT)?;
        Ok(MeasuredChild::new(size.width, size.height)
            .with_first_baseline(Self::FIRST_BASELINE))
    }
}
