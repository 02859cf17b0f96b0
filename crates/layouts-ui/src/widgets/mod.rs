//! Leaf nodes with fixed metrics.

mod sized_box;
mod text;

pub use sized_box::SizedBox;
pub use text::Text;
