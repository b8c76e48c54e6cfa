//! Monte Carlo simulator tests: determinism, percentiles, scenarios.

use riskcast_analysis::simulation::*;
use riskcast_core::config::RiskcastConfig;
use riskcast_core::types::{ImpactRange, Risk, Scenario};

/// One risk: p = 0.4, cost triangular(50k, 100k, 200k).
fn reference_risk() -> Vec<Risk> {
    vec![Risk {
        cost_range: Some(ImpactRange::new(50_000.0, 100_000.0, 200_000.0)),
        ..Risk::new("reference", "supply", 0.4, 100_000.0)
    }]
}

#[test]
fn test_reference_risk_is_deterministic() {
    let first = simulate_portfolio(&reference_risk(), 10_000, 42);
    let second = simulate_portfolio(&reference_risk(), 10_000, 42);
    assert_eq!(first, second);
    assert_eq!(first.iterations, 10_000);
    assert_eq!(first.seed, 42);
}

#[test]
fn test_reference_risk_percentiles() {
    let sim = simulate_portfolio(&reference_risk(), 10_000, 42);
    let cost = &sim.cost;

    // 60% of iterations never fire, so the median is zero.
    assert_eq!(cost.percentiles.p50, 0.0);
    assert!(cost.percentiles.p80 >= 50_000.0 && cost.percentiles.p80 <= 200_000.0);
    assert!(cost.percentiles.p90 >= cost.percentiles.p80);
    assert!(cost.percentiles.is_valid());
    assert_eq!(cost.min, 0.0);
    assert!(cost.max <= 200_000.0);

    // E[cost] = 0.4 * (50k + 100k + 200k) / 3
    let expected = 0.4 * 350_000.0 / 3.0;
    assert!((cost.mean - expected).abs() < 3_000.0, "mean {}", cost.mean);
}

#[test]
fn test_neutral_scenario_matches_default_path() {
    let risks = vec![
        Risk {
            sensitivity: 1.0,
            schedule_impact_days: 20.0,
            ..Risk::new("a", "x", 0.3, 10_000.0)
        },
        Risk::new("b", "y", 0.7, 4_000.0),
    ];
    let plain = simulate_portfolio(&risks, 5_000, 11);
    let neutral = MonteCarloSimulator::new(5_000)
        .with_seed(11)
        .with_scenario(Scenario::Neutral)
        .simulate(&risks);
    assert_eq!(plain, neutral);
}

#[test]
fn test_conservative_below_aggressive() {
    let risks: Vec<Risk> = (0..5)
        .map(|i| Risk {
            sensitivity: 1.0,
            ..Risk::new(format!("r{i}"), "ops", 0.3, 20_000.0 * (i + 1) as f64)
        })
        .collect();
    let run = |s| {
        MonteCarloSimulator::new(8_000)
            .with_seed(5)
            .with_scenario(s)
            .simulate(&risks)
    };
    let conservative = run(Scenario::Conservative);
    let aggressive = run(Scenario::Aggressive);
    assert!(conservative.cost.mean < aggressive.cost.mean);
    assert!(conservative.cost.percentiles.p90 < aggressive.cost.percentiles.p90);
}

#[test]
fn test_certain_risk_always_fires() {
    let risks = vec![Risk {
        schedule_range: Some(ImpactRange::new(10.0, 10.0, 10.0)),
        ..Risk::new("sure", "ops", 1.0, 1_000.0)
    }];
    let sim = simulate_portfolio(&risks, 2_000, 3);
    assert!(sim.cost.min >= 500.0);
    assert_eq!(sim.schedule.min, 10.0);
    assert_eq!(sim.schedule.max, 10.0);
}

#[test]
fn test_simulator_from_config() {
    let config = RiskcastConfig::from_toml(
        r#"
[simulation]
iterations = 1500
seed = 99
retained_samples = 100
"#,
    )
    .unwrap();
    let sim = MonteCarloSimulator::from_config(&config.simulation).simulate(&reference_risk());
    assert_eq!(sim.iterations, 1_500);
    assert_eq!(sim.seed, 99);
    assert_eq!(sim.cost.samples.len(), 100);
    let uncapped = simulate_portfolio(&reference_risk(), 1_500, 99);
    assert_eq!(sim.cost.percentiles, uncapped.cost.percentiles);
    assert_eq!(sim.cost.mean, uncapped.cost.mean);
}

#[test]
fn test_empty_portfolio_is_all_zero() {
    let sim = simulate_portfolio(&[], 1_000, 1);
    assert_eq!(sim.cost.mean, 0.0);
    assert_eq!(sim.cost.percentiles.p90, 0.0);
    assert_eq!(sim.schedule.max, 0.0);
}

#[test]
fn test_histogram_and_cdf_cover_retained_samples() {
    let sim = simulate_portfolio(&reference_risk(), 10_000, 8);
    assert_eq!(sim.cost.samples.len(), 2_000);

    let bins = sim.cost.histogram(20);
    let counted: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(counted, sim.cost.samples.len());

    let cdf = sim.cost.cdf_points();
    assert_eq!(cdf.len(), sim.cost.samples.len());
    assert_eq!(cdf.last().map(|p| p.1), Some(1.0));
    assert!(cdf.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn test_triangular_density_integrates_to_about_one() {
    let range = ImpactRange::new(50_000.0, 100_000.0, 200_000.0);
    let steps = 10_000;
    let width = 150_000.0 / steps as f64;
    let area: f64 = (0..steps)
        .map(|i| triangular_density(50_000.0 + (i as f64 + 0.5) * width, &range) * width)
        .sum();
    assert!((area - 1.0).abs() < 1e-3, "area {area}");
}
