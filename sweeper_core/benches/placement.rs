use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::{GameConfig, GridEngine, MineLayout, Placement};

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let tiers = [("sparse", 10), ("expert", 99), ("dense", 400), ("full", 480)];

    for (name, mines) in tiers {
        let config = GameConfig::new(30, 16, mines).expect("valid tier");
        for placement in [Placement::Rejection, Placement::Shuffle] {
            let config = config.with_placement(placement);
            group.bench_with_input(
                BenchmarkId::new(format!("{placement:?}"), name),
                &config,
                |b, &config| {
                    let mut seed = 0;
                    b.iter(|| {
                        seed += 1;
                        MineLayout::generate_seeded(black_box(config), seed)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let config = GameConfig::new(255, 255, 0).expect("valid board");
    let engine = GridEngine::new_game(config, 0).expect("valid board");

    c.bench_function("cascade/255x255_empty", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut engine| engine.reveal(black_box((127, 127)), true),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_placement, bench_cascade);
criterion_main!(benches);
