//! Benchmarks for the cube engine and scramble generator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twisty::net::format_net;
use twisty::{scramble, CubeState, Move, PuzzleKind};

/// Benchmark applying a full 7x7 scramble to a solved cube.
fn bench_apply_scramble(c: &mut Criterion) {
    let sequence = scramble::generate_with(PuzzleKind::SevenBySeven, &mut fastrand::Rng::with_seed(1));

    c.bench_function("apply_scramble_7x7", |b| {
        b.iter(|| {
            let mut state = CubeState::solved(7);
            state.apply_sequence(black_box(&sequence));
            state
        })
    });
}

/// Benchmark a single wide move on a 5x5.
fn bench_apply_wide_move(c: &mut Criterion) {
    let mv = Move::parse("3Rw'").unwrap();

    c.bench_function("apply_3rw_prime_5x5", |b| {
        let mut state = CubeState::solved(5);
        b.iter(|| state.apply(black_box(mv)))
    });
}

/// Benchmark scramble generation across sizes.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for kind in [PuzzleKind::TwoByTwo, PuzzleKind::ThreeByThree, PuzzleKind::SevenBySeven] {
        let mut rng = fastrand::Rng::with_seed(2);
        group.bench_function(kind.display_name(), |b| {
            b.iter(|| scramble::generate_with(black_box(kind), &mut rng))
        });
    }
    group.finish();
}

/// Benchmark parsing one layered wide token.
fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_token", |b| b.iter(|| Move::parse(black_box("3Rw2"))));
}

/// Benchmark rendering the net of a scrambled 7x7.
fn bench_format_net(c: &mut Criterion) {
    let mut state = CubeState::solved(7);
    state.apply_sequence(&scramble::generate_with(
        PuzzleKind::SevenBySeven,
        &mut fastrand::Rng::with_seed(3),
    ));

    c.bench_function("format_net_7x7", |b| b.iter(|| format_net(black_box(&state))));
}

criterion_group!(
    benches,
    bench_apply_scramble,
    bench_apply_wide_move,
    bench_generate,
    bench_parse,
    bench_format_net
);
criterion_main!(benches);
