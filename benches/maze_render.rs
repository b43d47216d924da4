use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_maze::core::{builtin_levels, Level, Maze};
use tui_maze::term::{FrameBuffer, MazeView, Viewport};
use tui_maze::types::GridPos;

fn large_rows() -> Vec<Vec<u8>> {
    // Start tile in the last cell: worst case for the start scan.
    let mut rows = vec![vec![0u8; 256]; 256];
    rows[255][255] = 2;
    rows
}

fn bench_level_from_rows(c: &mut Criterion) {
    let rows = large_rows();
    c.bench_function("level_from_rows_256x256", |b| {
        b.iter(|| Level::from_rows("large", black_box(rows.clone())))
    });
}

fn bench_render(c: &mut Criterion) {
    let Ok(levels) = builtin_levels() else {
        return;
    };
    let Ok(maze) = Maze::new(levels) else {
        return;
    };
    let view = MazeView::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_builtin_120x40", |b| {
        b.iter(|| view.render_into(black_box(&maze), Viewport::new(120, 40), &mut fb))
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let Ok(level) = Level::from_rows("large", large_rows()) else {
        return;
    };
    let Ok(maze) = Maze::new(vec![level]) else {
        return;
    };
    let view = MazeView::default();
    let vp = Viewport::new(200, 60);

    c.bench_function("hit_test", |b| {
        b.iter(|| view.hit_test(&maze, vp, black_box(37), black_box(21)))
    });
}

fn bench_toggle_paint(c: &mut Criterion) {
    let Ok(mut level) = Level::from_rows("large", large_rows()) else {
        return;
    };
    c.bench_function("toggle_paint", |b| {
        b.iter(|| level.toggle_paint(black_box(GridPos::new(100, 100))))
    });
}

criterion_group!(
    benches,
    bench_level_from_rows,
    bench_render,
    bench_hit_test,
    bench_toggle_paint
);
criterion_main!(benches);
