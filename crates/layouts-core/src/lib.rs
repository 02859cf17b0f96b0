//! Layout contracts: constraint envelopes, measurables and placements.

mod alignment;
mod axis;
mod constraints;
mod core;
mod error;
mod geometry;
pub mod solver;

pub use alignment::*;
pub use axis::*;
pub use constraints::*;
pub use self::core::*;
pub use error::*;
pub use geometry::*;
pub use solver::InvalidRange;

pub mod prelude {
    pub use crate::alignment::VerticalAlignment;
    pub use crate::constraints::Constraints;
    pub use crate::core::{
        LayoutModifier, Measurable, MeasurePolicy, MeasureResult, MeasuredChild, Placement,
    };
    pub use crate::error::LayoutError;
    pub use crate::geometry::IntSize;
}
