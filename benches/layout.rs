//! Benchmarks for page list construction, position resolution and layout.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spreadview::layout::{compose, Size};
use spreadview::{sane_position, Configuration, PageList, ViewerState};

fn config(pages: usize) -> Configuration {
    Configuration {
        page_count: pages,
        series_id: "bench".to_string(),
        spread: true,
        r2l: true,
        pageshift: true,
        ..Configuration::default()
    }
}

/// Building the list for documents of increasing length
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_page_list");
    for pages in [32usize, 256, 2048] {
        let config = config(pages);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &config, |b, config| {
            b.iter(|| PageList::build(black_box(config)))
        });
    }
    group.finish();
}

/// Resolving a sweep of raw positions, including out-of-range ones
fn bench_sane_position(c: &mut Criterion) {
    c.bench_function("sane_position_sweep", |b| {
        b.iter(|| {
            (-64i64..320)
                .map(|pos| sane_position(black_box(pos), 256, true))
                .sum::<usize>()
        })
    });
}

/// Placement of a spread on a landscape canvas
fn bench_compose(c: &mut Criterion) {
    let canvas = Size::new(3840.0, 2400.0);
    let left = Some(Size::new(1400.0, 2000.0));
    let right = Some(Size::new(1500.0, 2000.0));
    c.bench_function("compose_pair", |b| {
        b.iter(|| compose(black_box(canvas), black_box(left), black_box(right)))
    });
}

/// Paging through a whole document one spread at a time
fn bench_navigate(c: &mut Criterion) {
    c.bench_function("navigate_256_pages", |b| {
        b.iter(|| {
            let mut state = ViewerState::new(config(256));
            for _ in 0..130 {
                black_box(state.navigate(spreadview::Direction::Left, None));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_sane_position,
    bench_compose,
    bench_navigate
);
criterion_main!(benches);
