use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use layouts_ui::{
    Constraints, EdgeInsets, Layout, MeasurableExt, SizedBox, StaggeredGridPolicy, Text,
};

const CHILD_COUNT_SAMPLES: &[usize] = &[16, 128, 1024];
const ROWS: usize = 3;

fn chip_grid(children: usize) -> Layout {
    let chips = (0..children)
        .map(|index| {
            if index % 4 == 0 {
                SizedBox::new(16 + (index % 7) as i32, 24).boxed()
            } else {
                Text::new(format!("Topic {index}"))
                    .padding(EdgeInsets::uniform(8))
                    .boxed()
            }
        })
        .collect();
    Layout::new(StaggeredGridPolicy::new(ROWS), chips)
}

fn bench_staggered_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("staggered_grid");
    for &children in CHILD_COUNT_SAMPLES {
        let grid = chip_grid(children);
        group.bench_with_input(BenchmarkId::from_parameter(children), &grid, |b, grid| {
            b.iter(|| {
                let result = grid
                    .measure_root(black_box(Constraints::loose(Constraints::INFINITY, 1920)))
                    .expect("grid layout");
                black_box(result.size)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_staggered_grid);
criterion_main!(benches);
