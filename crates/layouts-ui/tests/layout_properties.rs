use layouts_testing::{boxed, FakeMeasurable};
use layouts_ui::{
    Constraints, FirstBaselineToTop, LayoutModifier, MeasurePolicy, StaggeredGridPolicy,
};
use proptest::prelude::*;

fn constraints() -> impl Strategy<Value = Constraints> {
    (0..200_i32, 0..200_i32, 0..200_i32, 0..200_i32).prop_map(|(w0, w1, h0, h1)| Constraints {
        min_width: w0.min(w1),
        max_width: w0.max(w1),
        min_height: h0.min(h1),
        max_height: h0.max(h1),
    })
}

fn child_sizes() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0..80_i32, 0..80_i32), 0..24)
}

proptest! {
    #[test]
    fn grid_size_stays_within_constraints(
        sizes in child_sizes(),
        rows in 1..8_usize,
        constraints in constraints(),
    ) {
        let (_, measurables) = boxed(&sizes);
        let result = StaggeredGridPolicy::new(rows).measure(&measurables, constraints).unwrap();
        prop_assert!(constraints.contains(result.size));
    }

    #[test]
    fn grid_pass_is_deterministic(
        sizes in child_sizes(),
        rows in 1..8_usize,
        constraints in constraints(),
    ) {
        let (_, measurables) = boxed(&sizes);
        let policy = StaggeredGridPolicy::new(rows);
        let first = policy.measure(&measurables, constraints).unwrap();
        let second = policy.measure(&measurables, constraints).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_child_lands_in_exactly_one_row(count in 0..64_usize, rows in 1..10_usize) {
        let policy = StaggeredGridPolicy::new(rows);
        let mut per_row = vec![0_usize; rows];
        for index in 0..count {
            let row = policy.row_of(index);
            prop_assert!(row < rows);
            per_row[row] += 1;
        }
        prop_assert_eq!(per_row.iter().sum::<usize>(), count);
    }

    #[test]
    fn rows_do_not_overlap_vertically(sizes in child_sizes(), rows in 1..8_usize) {
        let (fakes, measurables) = boxed(&sizes);
        let policy = StaggeredGridPolicy::new(rows);
        let constraints = Constraints::unbounded();
        let result = policy.measure(&measurables, constraints).unwrap();
        prop_assert_eq!(result.placements.len(), sizes.len());

        let spans: Vec<(usize, i32, i32)> = result
            .placements
            .iter()
            .map(|placement| {
                let height = sizes[placement.index].1;
                (policy.row_of(placement.index), placement.y, placement.y + height)
            })
            .collect();
        for (row_a, top_a, bottom_a) in &spans {
            for (row_b, top_b, bottom_b) in &spans {
                if row_a != row_b && top_a < bottom_a && top_b < bottom_b {
                    prop_assert!(bottom_a <= top_b || bottom_b <= top_a);
                }
            }
        }
        prop_assert!(fakes.iter().all(|fake| fake.measure_count() == 1));
    }

    #[test]
    fn baseline_lands_exactly_on_target(
        height in 0..200_i32,
        baseline in 0..200_i32,
        target in 0..200_i32,
    ) {
        let child = FakeMeasurable::with_baseline(10, height, baseline);
        let result = FirstBaselineToTop::new(target)
            .measure(&child, Constraints::unbounded())
            .unwrap();
        prop_assert_eq!(result.placements[0].y, target - baseline);
        prop_assert_eq!(result.size.height, height + target - baseline);
    }
}
