use std::cell::RefCell;
use std::rc::Rc;

use layouts_core::{Constraints, LayoutError, Measurable, MeasuredChild};

/// Measurable with a fixed natural size that records every measurement.
///
/// Clones share the recording, so a test can keep a handle while the
/// layout owns a boxed copy.
#[derive(Clone, Debug)]
pub struct FakeMeasurable {
    inner: Rc<FakeMeasurableInner>,
}

#[derive(Debug)]
struct FakeMeasurableInner {
    width: i32,
    height: i32,
    first_baseline: Option<i32>,
    constraints: RefCell<Vec<Constraints>>,
}

impl FakeMeasurable {
    pub fn new(width: i32, height: i32) -> Self {
        Self::build(width, height, None)
    }

    pub fn with_baseline(width: i32, height: i32, first_baseline: i32) -> Self {
        Self::build(width, height, Some(first_baseline))
    }

    fn build(width: i32, height: i32, first_baseline: Option<i32>) -> Self {
        Self {
            inner: Rc::new(FakeMeasurableInner {
                width,
                height,
                first_baseline,
                constraints: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Constraints passed to every `measure` call so far, in call order.
    pub fn recorded_constraints(&self) -> Vec<Constraints> {
        self.inner.constraints.borrow().clone()
    }

    pub fn measure_count(&self) -> usize {
        self.inner.constraints.borrow().len()
    }
}

impl Measurable for FakeMeasurable {
    /// Reports the natural size clamped into `constraints`, so the result
    /// always honours the envelope it was measured against.
    fn measure(&self, constraints: Constraints) -> Result<MeasuredChild, LayoutError> {
        self.inner.constraints.borrow_mut().push(constraints);
        let size = constraints.constrain(self.inner.width, self.inner.height)?;
        let child = MeasuredChild::new(size.width, size.height);
        Ok(match self.inner.first_baseline {
            Some(baseline) => child.with_first_baseline(baseline),
            None => child,
        })
    }
}

/// Boxes fakes of the given `(width, height)` pairs for a policy call.
pub fn boxed(sizes: &[(i32, i32)]) -> (Vec<FakeMeasurable>, Vec<Box<dyn Measurable>>) {
    let fakes: Vec<FakeMeasurable> = sizes
        .iter()
        .map(|&(width, height)| FakeMeasurable::new(width, height))
        .collect();
    let measurables = fakes
        .iter()
        .cloned()
        .map(|fake| Box::new(fake) as Box<dyn Measurable>)
        .collect();
    (fakes, measurables)
}
