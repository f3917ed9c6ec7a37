//! Benchmark: measure advance() cost per rule family.
//!
//! Each benchmark uses `iter_batched` to re-seed the driver before every
//! iteration so we measure an *active* simulation, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use automata::rules::{LifeLike, Rule, RuleTable};
use automata::{RuleSet, Simulation};

const SIZE: usize = 256;

/// Fixed rule on a dense random soup: baseline neighbor-counting cost.
fn bench_life(c: &mut Criterion) {
    c.bench_function("life_256x256", |b| {
        b.iter_batched(
            || Simulation::new(RuleSet::Life, SIZE, SIZE, 0.5, 7).unwrap(),
            |mut sim| {
                sim.advance();
                black_box(&sim);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Parametric rule with the same sets as the fixed one, measuring the
/// membership-test overhead against `bench_life`.
fn bench_life_like(c: &mut Criterion) {
    c.bench_function("life_like_b3_s23_256x256", |b| {
        let rule = LifeLike::parse("3", "23").unwrap();
        b.iter_batched(
            || Simulation::new(RuleSet::LifeLike(rule.clone()), SIZE, SIZE, 0.5, 7).unwrap(),
            |mut sim| {
                sim.advance();
                black_box(&sim);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Two-rule table encoding of the fixed rule: one extra neighbor tally per
/// dead cell, the worst case for table scanning.
fn bench_table(c: &mut Criterion) {
    c.bench_function("table_conway_256x256", |b| {
        let table = RuleTable::new(vec![
            Rule {
                source: 1,
                target: 1,
                counts: vec![2, 3],
                neighbor_states: vec![1],
            },
            Rule {
                source: 0,
                target: 1,
                counts: vec![3],
                neighbor_states: vec![1],
            },
        ])
        .unwrap();
        b.iter_batched(
            || Simulation::new(RuleSet::Table(table.clone()), SIZE, SIZE, 0.5, 7).unwrap(),
            |mut sim| {
                sim.advance();
                black_box(&sim);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Particle pass with sand actively falling from the top of the grid.
fn bench_particles_falling(c: &mut Criterion) {
    c.bench_function("particles_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut sim = Simulation::new(RuleSet::Particles, SIZE, SIZE, 0.0, 7).unwrap();
                for y in 0..(SIZE as i32 / 5) {
                    for x in 0..SIZE as i32 {
                        let state = if x % 2 == 0 { 1 } else { 2 };
                        sim.write(x, y, state).unwrap();
                    }
                }
                sim
            },
            |mut sim| {
                sim.advance();
                black_box(&sim);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_life,
    bench_life_like,
    bench_table,
    bench_particles_falling,
);
criterion_main!(benches);
