//! Portfolio exposure aggregation: monthly totals, category breakdown,
//! top drivers, and concentration.

use std::collections::BTreeMap;

use rayon::prelude::*;
use riskcast_core::constants::finite_or_zero;
use riskcast_core::tracing::metrics;
use riskcast_core::types::{Risk, Scenario};

use super::curve::compute_risk_exposure_curve;
use super::sanitize::sanitize_risk;
use super::types::{
    Concentration, ConcentrationBasis, ExposureDriver, PortfolioExposure,
    PortfolioExposureOptions, RiskExposureCurve,
};

/// Bucket for risks with no category when concentrating by category.
const UNCATEGORIZED: &str = "uncategorized";

/// Aggregate exposure curves for a portfolio under one scenario.
///
/// Risks are sanitized first; sanitizing never fails. Curves are computed
/// in parallel, then reduced sequentially in input order so the result is
/// independent of thread scheduling.
pub fn compute_portfolio_exposure(
    risks: &[Risk],
    scenario: Scenario,
    horizon_months: usize,
    options: &PortfolioExposureOptions,
) -> PortfolioExposure {
    let span = tracing::info_span!(
        "portfolio_exposure",
        risk_count = risks.len(),
        scenario = %scenario,
        portfolio_exposure_total = tracing::field::Empty,
        sanitation_warnings = tracing::field::Empty,
    );
    let _guard = span.enter();

    let results: Vec<_> = risks
        .par_iter()
        .enumerate()
        .map(|(index, risk)| {
            let (clean, warnings) = sanitize_risk(risk, index);
            let curve = compute_risk_exposure_curve(&clean, scenario, horizon_months);
            (curve, warnings)
        })
        .collect();

    let mut curves = Vec::with_capacity(results.len());
    let mut diagnostics = Vec::new();
    for (curve, warnings) in results {
        for warning in &warnings {
            tracing::debug!(
                risk_id = %warning.risk_id,
                field = %warning.field,
                message = %warning.message,
                "sanitized risk field"
            );
        }
        diagnostics.extend(warnings);
        curves.push(curve);
    }

    let mut monthly_total = vec![0.0; horizon_months];
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    for curve in &curves {
        for (slot, value) in monthly_total.iter_mut().zip(&curve.monthly_exposure) {
            *slot += value;
        }
        *by_category.entry(curve.category.clone()).or_insert(0.0) += curve.total;
    }
    let monthly_total: Vec<f64> = monthly_total.into_iter().map(finite_or_zero).collect();
    let total = finite_or_zero(monthly_total.iter().sum());

    let top_drivers = rank_drivers(&curves, total, options.top_n);
    let concentration = compute_concentration(&curves, total);

    span.record(metrics::PORTFOLIO_EXPOSURE_TOTAL, total);
    span.record(metrics::SANITATION_WARNINGS, diagnostics.len());
    tracing::info!(
        total,
        drivers = top_drivers.len(),
        hhi = concentration.hhi,
        "portfolio exposure computed"
    );

    PortfolioExposure {
        scenario,
        horizon_months,
        monthly_total,
        total,
        by_category,
        top_drivers,
        concentration,
        curves,
        diagnostics: if options.include_debug {
            diagnostics
        } else {
            Vec::new()
        },
    }
}

/// Curves ranked by total, descending. Equal totals keep input order.
fn rank_drivers(curves: &[RiskExposureCurve], total: f64, top_n: usize) -> Vec<ExposureDriver> {
    let mut drivers: Vec<ExposureDriver> = curves
        .iter()
        .map(|curve| ExposureDriver {
            risk_id: curve.risk_id.clone(),
            category: curve.category.clone(),
            total: curve.total,
            share: share_of(curve.total, total),
        })
        .collect();
    drivers.sort_by(|a, b| b.total.total_cmp(&a.total));
    drivers.truncate(top_n);
    drivers
}

fn compute_concentration(curves: &[RiskExposureCurve], total: f64) -> Concentration {
    let by_category = curves.iter().any(|c| !c.category.is_empty());
    let basis = if by_category {
        ConcentrationBasis::Category
    } else {
        ConcentrationBasis::Risk
    };

    if !(total > 0.0) {
        return Concentration {
            top3_share: 0.0,
            hhi: 0.0,
            basis,
        };
    }

    let amounts: Vec<f64> = if by_category {
        let mut buckets: BTreeMap<&str, f64> = BTreeMap::new();
        for curve in curves {
            let key = if curve.category.is_empty() {
                UNCATEGORIZED
            } else {
                curve.category.as_str()
            };
            *buckets.entry(key).or_insert(0.0) += curve.total;
        }
        buckets.into_values().collect()
    } else {
        curves.iter().map(|c| c.total).collect()
    };

    let mut shares: Vec<f64> = amounts.iter().map(|a| share_of(*a, total)).collect();
    shares.sort_by(|a, b| b.total_cmp(a));

    let top3_share: f64 = shares.iter().take(3).sum();
    let hhi: f64 = shares.iter().map(|s| s * s).sum();

    Concentration {
        top3_share: top3_share.clamp(0.0, 1.0),
        hhi: hhi.clamp(0.0, 1.0),
        basis,
    }
}

fn share_of(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        finite_or_zero(amount / total).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
