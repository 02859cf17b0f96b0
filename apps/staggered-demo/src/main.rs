use layouts_core::{Constraints, LayoutError, Measurable, MeasureResult, VerticalAlignment};
use layouts_ui::{
    EdgeInsets, Layout, MeasurableExt, RowPolicy, SizedBox, StaggeredGridPolicy, Text,
};

const VIEWPORT_WIDTH: i32 = 360;
const VIEWPORT_HEIGHT: i32 = 640;
const GRID_ROWS: usize = 3;
const CHIP_MARGIN: i32 = 8;
const SWATCH_SIZE: i32 = 16;
const SWATCH_GAP: i32 = 4;
const BASELINE_TARGET: i32 = 32;

const TOPICS: &[&str] = &[
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
];

fn main() {
    env_logger::init();

    println!("=== Staggered Grid Example ===");
    println!(
        "Viewport {VIEWPORT_WIDTH}x{VIEWPORT_HEIGHT}, {GRID_ROWS} rows, horizontally scrollable"
    );
    println!();

    match staggered_topics() {
        Ok(result) => print_result("topics", &result, |index| TOPICS[index]),
        Err(err) => log::error!("failed to lay out topics: {err}"),
    }

    println!();
    match baseline_text() {
        Ok(result) => print_result("first baseline to top", &result, |_| "Hi there!"),
        Err(err) => log::error!("failed to lay out baseline text: {err}"),
    }

    // A box has no baseline, so the baseline layout refuses it.
    let misuse = SizedBox::new(40, 40).first_baseline_to_top(BASELINE_TARGET);
    if let Err(err) = misuse.measure_root(Constraints::loose(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)) {
        log::error!("failed to lay out baseline box: {err}");
    }
}

/// Topic chips inside a grid that may scroll horizontally.
fn staggered_topics() -> Result<MeasureResult, LayoutError> {
    let chips = TOPICS.iter().map(|topic| chip(topic)).collect();
    let grid = Layout::new(StaggeredGridPolicy::default().rows(GRID_ROWS), chips);

    let scrolling = Constraints {
        min_width: 0,
        max_width: Constraints::INFINITY,
        min_height: 0,
        max_height: VIEWPORT_HEIGHT,
    };
    grid.measure_root(scrolling)
}

/// Swatch, gap and label in a centered row, padded like a card.
fn chip(topic: &str) -> Box<dyn Measurable> {
    let row = Layout::new(
        RowPolicy::new(VerticalAlignment::CenterVertically),
        vec![
            SizedBox::new(SWATCH_SIZE, SWATCH_SIZE).boxed(),
            SizedBox::new(SWATCH_GAP, 0).boxed(),
            Text::new(topic).boxed(),
        ],
    );
    row.padding(EdgeInsets::each(8, 4, 8, 4))
        .padding(EdgeInsets::uniform(CHIP_MARGIN))
        .boxed()
}

fn baseline_text() -> Result<MeasureResult, LayoutError> {
    Text::new("Hi there!")
        .first_baseline_to_top(BASELINE_TARGET)
        .measure_root(Constraints::loose(VIEWPORT_WIDTH, VIEWPORT_HEIGHT))
}

fn print_result<'a>(title: &str, result: &MeasureResult, label: impl Fn(usize) -> &'a str) {
    println!(
        "{title}: {}x{} ({} children)",
        result.size.width,
        result.size.height,
        result.placements.len()
    );
    for placement in &result.placements {
        println!(
            "  #{:<2} ({:>4}, {:>4})  {}",
            placement.index,
            placement.x,
            placement.y,
            label(placement.index)
        );
    }
}
