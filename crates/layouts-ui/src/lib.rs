//! Custom layouts built on the `layouts-core` measure/place contracts.

pub mod layout;
pub mod modifier;
pub mod widgets;

pub use layout::policies::{RowPolicy, StackedColumnPolicy, StaggeredGridPolicy};
pub use layout::Layout;
pub use layouts_core::*;
pub use modifier::{EdgeInsets, FirstBaselineToTop, MeasurableExt, ModifiedNode, Padding};
pub use widgets::{SizedBox, Text};

pub mod prelude {
    pub use crate::layout::policies::{RowPolicy, StackedColumnPolicy, StaggeredGridPolicy};
    pub use crate::layout::Layout;
    pub use crate::modifier::{EdgeInsets, MeasurableExt};
    pub use crate::widgets::{SizedBox, Text};
    pub use layouts_core::prelude::*;
}
