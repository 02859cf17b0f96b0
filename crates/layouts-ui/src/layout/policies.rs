use layouts_core::solver::clamp_axis;
use layouts_core::{
    Axis, Constraints, IntSize, LayoutError, Measurable, MeasurePolicy, MeasureResult, Placement,
    VerticalAlignment,
};

/// MeasurePolicy for the staggered grid - deals children round-robin into a
/// fixed number of rows stacked top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaggeredGridPolicy {
    pub rows: usize,
}

impl StaggeredGridPolicy {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Row that the child at `index` lands in. Depends on the index only.
    pub fn row_of(&self, index: usize) -> usize {
        index % self.rows
    }
}

impl Default for StaggeredGridPolicy {
    fn default() -> Self {
        Self { rows: 3 }
    }
}

impl MeasurePolicy for StaggeredGridPolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        constraints.validate()?;
        if self.rows == 0 {
            return Err(LayoutError::NoRows);
        }

        let mut row_widths = vec![0_i32; self.rows];
        let mut row_heights = vec![0_i32; self.rows];

        // Children see the incoming constraints untouched.
        let mut measured = Vec::with_capacity(measurables.len());
        for (index, measurable) in measurables.iter().enumerate() {
            let child = measurable.measure(constraints)?;
            let row = self.row_of(index);
            row_widths[row] = row_widths[row].saturating_add(child.width);
            row_heights[row] = row_heights[row].max(child.height);
            measured.push(child);
        }

        let widest = row_widths.iter().copied().max().unwrap_or(0);
        let stacked = row_heights
            .iter()
            .fold(0_i32, |total, height| total.saturating_add(*height));
        let width = clamp_axis(widest, &constraints, Axis::Horizontal)?;
        let height = clamp_axis(stacked, &constraints, Axis::Vertical)?;

        let mut row_y = vec![0_i32; self.rows];
        for row in 1..self.rows {
            row_y[row] = row_y[row - 1].saturating_add(row_heights[row - 1]);
        }

        let mut row_x = vec![0_i32; self.rows];
        let mut placements = Vec::with_capacity(measured.len());
        for (index, child) in measured.iter().enumerate() {
            let row = self.row_of(index);
            let placement = Placement::new(index, row_x[row], row_y[row]);
            log::trace!(
                "staggered child {index} -> row {row} at ({}, {})",
                placement.x,
                placement.y
            );
            placements.push(placement);
            row_x[row] = row_x[row].saturating_add(child.width);
        }

        log::debug!(
            "staggered grid: {} children in {} rows -> {}x{}",
            measured.len(),
            self.rows,
            width,
            height
        );
        Ok(MeasureResult::new(IntSize::new(width, height), placements))
    }
}

/// MeasurePolicy for a hand-rolled column - stacks children at `x = 0`.
///
/// The column claims the full max constraints on bounded axes. On an
/// unbounded axis it shrinks to its content instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackedColumnPolicy;

impl StackedColumnPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MeasurePolicy for StackedColumnPolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        constraints.validate()?;

        let mut placements = Vec::with_capacity(measurables.len());
        let mut y = 0_i32;
        let mut content_width = 0_i32;
        for (index, measurable) in measurables.iter().enumerate() {
            let child = measurable.measure(constraints)?;
            placements.push(Placement::new(index, 0, y));
            y = y.saturating_add(child.height);
            content_width = content_width.max(child.width);
        }

        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            clamp_axis(content_width, &constraints, Axis::Horizontal)?
        };
        let height = if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            clamp_axis(y, &constraints, Axis::Vertical)?
        };

        log::debug!("stacked column: {} children -> {width}x{height}", placements.len());
        Ok(MeasureResult::new(IntSize::new(width, height), placements))
    }
}

/// MeasurePolicy for Row layout - arranges children horizontally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowPolicy {
    pub vertical_alignment: VerticalAlignment,
}

impl RowPolicy {
    pub fn new(vertical_alignment: VerticalAlignment) -> Self {
        Self { vertical_alignment }
    }
}

impl MeasurePolicy for RowPolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        constraints.validate()?;
        let child_constraints = Constraints {
            min_width: 0,
            ..constraints
        };

        let mut measured = Vec::with_capacity(measurables.len());
        let mut total_width = 0_i32;
        let mut max_height = 0_i32;
        for measurable in measurables {
            let child = measurable.measure(child_constraints)?;
            total_width = total_width.saturating_add(child.width);
            max_height = max_height.max(child.height);
            measured.push(child);
        }

        let width = clamp_axis(total_width, &constraints, Axis::Horizontal)?;
        let height = clamp_axis(max_height, &constraints, Axis::Vertical)?;

        let mut x = 0_i32;
        let mut placements = Vec::with_capacity(measured.len());
        for (index, child) in measured.iter().enumerate() {
            let y = self.vertical_alignment.align(height, child.height);
            placements.push(Placement::new(index, x, y));
            x = x.saturating_add(child.width);
        }

        log::debug!("row: {} children -> {width}x{height}", placements.len());
        Ok(MeasureResult::new(IntSize::new(width, height), placements))
    }
}

#[cfg(test)]
#[path = "tests/policies_tests.rs"]
mod tests;
