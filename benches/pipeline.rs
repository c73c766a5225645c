//! Benchmarks for the strike-assets pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use strike_assets::catalog::catalog;
use strike_assets::render::{alpha_over, Canvas, Glow, Primitive};
use strike_assets::sprites::{self, Style};
use strike_assets::types::{Colour, Palette};
use strike_assets::{export_scaled, generate_entry};

const CYAN: Colour = Colour::rgb(0, 255, 255);

// -- Compositing benchmarks --

fn bench_compositing(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");

    group.bench_function("alpha_over", |b| {
        let src = CYAN.with_alpha(90);
        let dst = Colour::rgb(20, 10, 40).with_alpha(200);
        b.iter(|| alpha_over(black_box(src), black_box(dst)))
    });

    group.bench_function("composite_circle_64", |b| {
        let mut canvas = Canvas::filled(64, 64, Colour::rgb(15, 15, 25));
        b.iter(|| {
            canvas.composite(|layer| {
                layer.draw(Primitive::circle((32, 32), 20).fill(CYAN.with_alpha(80)))
            });
        })
    });

    group.bench_function("glow_spread_8", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(64, 64);
            Glow::circle((32, 32), 6, CYAN)
                .spread(black_box(8))
                .intensity(120)
                .draw(&mut canvas);
            canvas
        })
    });

    group.bench_function("neon_line", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(128, 64);
            Glow::line((8, 32), (120, 32), 2, CYAN)
                .spread(4)
                .intensity(80)
                .draw(&mut canvas);
            canvas
        })
    });

    group.finish();
}

// -- Scaling benchmarks --

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    let mut canvas = Canvas::new(256, 256);
    canvas.draw(Primitive::rect([16, 16, 240, 240]).fill(CYAN));

    group.bench_function("nearest_2x_256", |b| b.iter(|| black_box(&canvas).scaled(2)));
    group.bench_function("nearest_3x_256", |b| b.iter(|| black_box(&canvas).scaled(3)));

    group.bench_function("export_scaled_64", |b| {
        let dir = tempfile::tempdir().unwrap();
        let small = Canvas::filled(64, 64, CYAN);
        let base = dir.path().join("bench");
        b.iter(|| export_scaled(black_box(&small), &base).unwrap())
    });

    group.finish();
}

// -- Sprite benchmarks --

fn bench_sprites(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprites");

    let cyberpunk = Palette::cyberpunk();
    let overhead = Palette::overhead();
    let side = catalog(Style::SideView);
    let top = catalog(Style::TopDown);

    group.bench_function("build_side_view_catalog", |b| {
        b.iter(|| {
            for entry in &side {
                sprites::build(Style::SideView, entry.sprite, entry.state, entry.size, &cyberpunk)
                    .unwrap();
            }
        })
    });

    group.bench_function("build_top_down_catalog", |b| {
        b.iter(|| {
            for entry in &top {
                sprites::build(Style::TopDown, entry.sprite, entry.state, entry.size, &overhead)
                    .unwrap();
            }
        })
    });

    group.bench_function("generate_boss_entry", |b| {
        let dir = tempfile::tempdir().unwrap();
        let boss = side.iter().find(|e| e.name == "boss_gunship").unwrap();
        b.iter(|| generate_entry(Style::SideView, boss, &cyberpunk, dir.path()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compositing, bench_scaling, bench_sprites);
criterion_main!(benches);
