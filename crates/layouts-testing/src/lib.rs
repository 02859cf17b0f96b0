//! Test doubles for exercising layout policies without a UI toolkit.

pub mod measurables;

pub use measurables::*;

pub mod prelude {
    pub use crate::measurables::{boxed, FakeMeasurable};
}
