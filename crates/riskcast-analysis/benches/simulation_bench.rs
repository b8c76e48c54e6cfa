//! Monte Carlo simulator benchmarks.
//!
//! Run with: cargo bench -p riskcast-analysis --bench simulation_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use riskcast_analysis::simulation::MonteCarloSimulator;
use riskcast_analysis::{compute_portfolio_exposure, PortfolioExposureOptions};
use riskcast_core::types::{ImpactRange, Risk, Scenario};

fn make_portfolio(count: usize) -> Vec<Risk> {
    (0..count)
        .map(|i| {
            let base = 10_000.0 + 1_000.0 * i as f64;
            Risk {
                sensitivity: 0.6,
                schedule_impact_days: 5.0 + (i % 20) as f64,
                cost_range: Some(ImpactRange::new(base * 0.6, base, base * 2.5)),
                ..Risk::new(format!("risk-{i}"), format!("cat-{}", i % 7), 0.05 + (i % 10) as f64 * 0.05, base)
            }
        })
        .collect()
}

fn simulation_by_portfolio_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(10);

    for size in [10, 50, 200] {
        let risks = make_portfolio(size);
        group.bench_with_input(BenchmarkId::new("10k_iterations", size), &size, |b, _| {
            b.iter(|| {
                MonteCarloSimulator::new(10_000)
                    .with_seed(42)
                    .with_scenario(Scenario::Aggressive)
                    .simulate(&risks)
            });
        });
    }
    group.finish();
}

fn exposure_by_portfolio_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_exposure");

    for size in [100, 1_000] {
        let risks = make_portfolio(size);
        let options = PortfolioExposureOptions::default();
        group.bench_with_input(BenchmarkId::new("36_months", size), &size, |b, _| {
            b.iter(|| compute_portfolio_exposure(&risks, Scenario::Neutral, 36, &options));
        });
    }
    group.finish();
}

criterion_group!(benches, simulation_by_portfolio_size, exposure_by_portfolio_size);
criterion_main!(benches);
