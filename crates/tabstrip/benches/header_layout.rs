//! Benchmarks for header layout and drag handling

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tabstrip::event::PointerEvent;
use tabstrip_core::geometry::Rect;
use tabstrip_test_utils::PaneFixture;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_layout");

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut pane = PaneFixture::new(count).width(800.0).build();
            let mut width = 800.0;
            b.iter(|| {
                width = if width == 800.0 { 801.0 } else { 800.0 };
                pane.layout(Rect::new(0.0, 0.0, width, 600.0));
                black_box(pane.offset())
            });
        });
    }

    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_by");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut pane = PaneFixture::new(count).width(800.0).build();
            let mut delta = -37.0;
            b.iter(|| {
                pane.scroll_by(delta);
                if pane.offset() == 0.0 || pane.offset() <= -(count as f32 * 100.0 - 800.0) {
                    delta = -delta;
                }
                black_box(pane.offset())
            });
        });
    }

    group.finish();
}

fn bench_drag_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_reorder");

    for count in [10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut pane = PaneFixture::new(count)
                    .width(count as f32 * 100.0)
                    .reorderable()
                    .build();
                pane.pointer_pressed(PointerEvent::left(10.0, 10.0));
                let mut x = 10.0;
                while x < count as f32 * 100.0 - 100.0 {
                    x += 25.0;
                    pane.pointer_dragged(tabstrip_core::math::vec2(x, 10.0));
                }
                pane.pointer_released(PointerEvent::left(x, 10.0));
                pane.tick(1.0);
                black_box(pane.tabs().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_scroll, bench_drag_reorder);
criterion_main!(benches);
