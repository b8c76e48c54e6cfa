//! Forecast confidence tests: ordering, depth, bands.

use chrono::{Duration, TimeZone, Utc};
use riskcast_analysis::forecast::*;
use riskcast_core::config::ConfidenceConfig;
use riskcast_core::types::RiskSnapshot;

fn snapshots(scores: &[f64]) -> Vec<RiskSnapshot> {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| RiskSnapshot::new("r", i as u32, start + Duration::weeks(i as i64), *s))
        .collect()
}

#[test]
fn test_monotone_history_beats_flip_flop() {
    let monotone = compute_forecast_confidence(&snapshots(&[20.0, 30.0, 40.0, 50.0, 60.0, 70.0]));
    let flip_flop = compute_forecast_confidence(&snapshots(&[50.0, 60.0, 50.0, 60.0, 50.0, 60.0]));
    assert!(monotone.score > flip_flop.score);
    assert_eq!(flip_flop.band, ConfidenceBand::Medium);
    assert_eq!(monotone.band, ConfidenceBand::High);
}

#[test]
fn test_known_scores() {
    let cases: [(&[f64], u8); 4] = [
        (&[40.0, 50.0], 79),
        (&[35.0, 42.0, 48.0, 55.0], 88),
        (&[30.0, 37.0, 44.0, 51.0, 58.0, 65.0], 97),
        (&[50.0, 50.0, 50.0], 84),
    ];
    for (scores, expected) in cases {
        let c = compute_forecast_confidence(&snapshots(scores));
        assert_eq!(c.score, expected, "{scores:?}");
        assert!(!c.insufficient);
    }
}

#[test]
fn test_longer_consistent_history_never_scores_lower() {
    let mut previous = 0;
    for len in 2..=8 {
        let scores: Vec<f64> = (0..len).map(|i| 30.0 + 4.0 * i as f64).collect();
        let c = compute_forecast_confidence(&snapshots(&scores));
        assert!(c.score >= previous, "len {len}: {} < {previous}", c.score);
        previous = c.score;
    }
}

#[test]
fn test_growing_reference_histories_never_score_lower() {
    let histories: [&[f64]; 3] = [
        &[40.0, 50.0],
        &[35.0, 42.0, 48.0, 55.0],
        &[30.0, 38.0, 45.0, 52.0, 58.0, 65.0],
    ];
    let scores: Vec<u8> = histories
        .iter()
        .map(|h| compute_forecast_confidence(&snapshots(h)).score)
        .collect();
    assert_eq!(scores, vec![79, 88, 95]);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{scores:?}");
}

#[test]
fn test_breakdown_reports_components() {
    let c = compute_forecast_confidence(&snapshots(&[20.0, 30.0, 40.0, 50.0, 60.0]));
    let breakdown = c.breakdown.unwrap();
    assert_eq!(breakdown.points_used, 5);
    assert_eq!(breakdown.depth, 80.0);
    assert_eq!(breakdown.stability, 100.0);
    assert_eq!(breakdown.volatility_penalty, 0.0);
}

#[test]
fn test_scorer_follows_config() {
    let config = ConfidenceConfig {
        window: Some(3),
        insufficient_score: Some(5),
    };
    let scorer = ForecastConfidenceScorer::from_config(&config);
    assert_eq!(scorer.score(&[]).score, 5);

    let c = scorer.score(&snapshots(&[90.0, 10.0, 20.0, 30.0]));
    assert_eq!(c.breakdown.map(|b| b.points_used), Some(3));
    assert_eq!(c.score, 84);
}
