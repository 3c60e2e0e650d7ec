//! Criterion benchmarks for the simulation engine and the timing sweep.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ytdrop_core::{PendleMode, ShareParams, SimulationConfig, TvlMode, TvlParams};
use ytdrop_sim::{simulate_airdrop, timing_sweep};

fn simple_config() -> SimulationConfig {
    SimulationConfig {
        pendle_mode: PendleMode::Simple,
        tvl: TvlParams::interpolated(TvlMode::Logistic, 10e6, 60e6),
        share: ShareParams::linear(0.1, 0.4),
        token_configs: vec![],
        ..SimulationConfig::example()
    }
}

fn bench_simulate_by_tokens(c: &mut Criterion) {
    let config = SimulationConfig::example();
    c.bench_function("simulate_by_tokens_80d", |b| {
        b.iter(|| simulate_airdrop(black_box(&config)))
    });
}

fn bench_simulate_simple(c: &mut Criterion) {
    let config = simple_config();
    c.bench_function("simulate_simple_80d", |b| {
        b.iter(|| simulate_airdrop(black_box(&config)))
    });
}

fn bench_proportional(c: &mut Criterion) {
    let config = SimulationConfig {
        network_points_total: Some(5e9),
        ..SimulationConfig::example()
    };
    c.bench_function("simulate_proportional_80d", |b| {
        b.iter(|| simulate_airdrop(black_box(&config)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let config = SimulationConfig::example();
    c.bench_function("timing_sweep_80d", |b| {
        b.iter(|| timing_sweep(black_box(&config), None))
    });
}

criterion_group!(
    benches,
    bench_simulate_by_tokens,
    bench_simulate_simple,
    bench_proportional,
    bench_sweep,
);
criterion_main!(benches);
