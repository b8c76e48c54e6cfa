//! Forward score projector.
//!
//! Extrapolates each risk's composite score across future review cycles
//! with a decaying momentum, once per projection profile, and enriches the
//! result with forecast confidence, mitigation effect, and governance
//! signals.

use std::collections::BTreeMap;

use rayon::prelude::*;
use riskcast_core::config::{defaults, ProjectionProfiles, RiskcastConfig};
use riskcast_core::constants::{clamp01_or, clamp_score};
use riskcast_core::errors::ConfigError;
use riskcast_core::tracing::metrics;
use riskcast_core::traits::HistoryLookup;
use riskcast_core::types::{DecayParams, Risk, RiskSnapshot, Scenario};

use super::confidence::ForecastConfidenceScorer;
use super::momentum::MomentumTracker;
use super::pressure::{compute_portfolio_forward_pressure, PressureInput};
use super::types::{
    ForecastPoint, ForwardProjection, MomentumDirection, RiskForecast, RiskMitigationForecast,
    ScenarioTtc,
};
use crate::signals::{
    compute_fragility, compute_instability, evaluate_early_warning, InstabilityInputs,
    SignalThresholds,
};

/// Per-run options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionOptions {
    /// Projection profile; `None` behaves exactly like neutral.
    pub profile: Option<Scenario>,
}

/// Tunables for the projector, usually resolved from [`RiskcastConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSettings {
    pub horizon: u32,
    pub critical_threshold: f64,
    pub momentum_window: usize,
    pub confidence: ForecastConfidenceScorer,
    pub signals: SignalThresholds,
}

impl ProjectionSettings {
    pub fn from_config(config: &RiskcastConfig) -> Self {
        Self {
            horizon: config.projection.effective_horizon(),
            critical_threshold: config.projection.effective_critical_threshold(),
            momentum_window: config.projection.effective_momentum_window(),
            confidence: ForecastConfidenceScorer::from_config(&config.confidence),
            signals: SignalThresholds::from_config(&config.signals),
        }
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            horizon: defaults::DEFAULT_PROJECTION_HORIZON,
            critical_threshold: defaults::DEFAULT_CRITICAL_THRESHOLD,
            momentum_window: defaults::DEFAULT_MOMENTUM_WINDOW,
            confidence: ForecastConfidenceScorer::default(),
            signals: SignalThresholds::default(),
        }
    }
}

/// Where a projection starts from.
#[derive(Debug, Clone, Copy)]
struct Trajectory {
    current: f64,
    momentum: f64,
    direction: MomentumDirection,
    /// Base point confidence, 0.0-1.0.
    confidence: f64,
}

/// Projects risk scores forward under validated profiles.
#[derive(Debug, Clone, Default)]
pub struct ForwardProjector {
    profiles: ProjectionProfiles,
    settings: ProjectionSettings,
}

impl ForwardProjector {
    pub fn new(profiles: ProjectionProfiles, settings: ProjectionSettings) -> Self {
        Self { profiles, settings }
    }

    /// Build from configuration. Fails when the profiles are out of band.
    pub fn from_config(config: &RiskcastConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.projection_profiles()?,
            ProjectionSettings::from_config(config),
        ))
    }

    /// Project every risk and aggregate portfolio pressure.
    pub fn run(
        &self,
        risks: &[Risk],
        history: &dyn HistoryLookup,
        options: &ProjectionOptions,
    ) -> ForwardProjection {
        let profile = options.profile.unwrap_or_default();
        let span = tracing::info_span!(
            "forward_projection",
            risk_count = risks.len(),
            profile = %profile,
            projected_critical = tracing::field::Empty,
            early_warnings = tracing::field::Empty,
            projection_time_ms = tracing::field::Empty,
        );
        let _guard = span.enter();
        let start = std::time::Instant::now();

        let results: Vec<RiskMitigationForecast> = risks
            .par_iter()
            .map(|risk| self.project_risk(risk, history, profile))
            .collect();

        let inputs: Vec<PressureInput> = results.iter().map(PressureInput::from).collect();
        let forward_pressure = compute_portfolio_forward_pressure(&inputs, Some(profile));
        let early_warnings = results.iter().filter(|r| r.early_warning).count();

        let mut forecasts = BTreeMap::new();
        for forecast in results {
            if forecasts.contains_key(&forecast.risk_id) {
                tracing::warn!(risk_id = %forecast.risk_id, "duplicate risk id; keeping the later forecast");
            }
            forecasts.insert(forecast.risk_id.clone(), forecast);
        }

        span.record(metrics::PROJECTED_CRITICAL, forward_pressure.projected_critical_count);
        span.record(metrics::EARLY_WARNINGS, early_warnings);
        span.record(metrics::PROJECTION_TIME_MS, start.elapsed().as_millis() as u64);
        tracing::info!(
            pressure = %forward_pressure.pressure_class,
            mitigation_insufficient = forward_pressure.mitigation_insufficient_count,
            "forward projection complete"
        );

        ForwardProjection {
            forecasts,
            forward_pressure,
        }
    }

    /// Project one risk under `profile`.
    pub fn project_risk(
        &self,
        risk: &Risk,
        history: &dyn HistoryLookup,
        profile: Scenario,
    ) -> RiskMitigationForecast {
        let snapshots = history.risk_history(&risk.id);
        let latest = history.latest_snapshot(&risk.id);

        let mut scores: Vec<f64> = snapshots.iter().map(RiskSnapshot::score).collect();
        if scores.is_empty() {
            if let Some(snapshot) = &latest {
                scores.push(snapshot.score());
            }
        }
        let current = latest
            .as_ref()
            .map(RiskSnapshot::score)
            .or_else(|| scores.last().copied())
            .unwrap_or(0.0);

        let confidence = self.settings.confidence.score_values(&scores);
        let tracker = self.tracker(&scores);
        let trajectory = Trajectory {
            current,
            momentum: tracker.momentum(),
            direction: tracker.direction(),
            confidence: confidence.fraction(),
        };

        let conservative = self.project(&risk.id, trajectory, Scenario::Conservative);
        let neutral = self.project(&risk.id, trajectory, Scenario::Neutral);
        let aggressive = self.project(&risk.id, trajectory, Scenario::Aggressive);
        let scenario_ttc = ScenarioTtc {
            conservative: conservative.time_to_critical,
            neutral: neutral.time_to_critical,
            aggressive: aggressive.time_to_critical,
        };
        let spread = (aggressive.final_score() - conservative.final_score()).abs();

        let baseline = match profile {
            Scenario::Conservative => conservative,
            Scenario::Neutral => neutral,
            Scenario::Aggressive => aggressive,
        };
        let mitigated = self.project(
            &risk.id,
            Trajectory {
                momentum: mitigated_momentum(risk, trajectory.momentum),
                ..trajectory
            },
            profile,
        );

        let instability = compute_instability(&InstabilityInputs::from_scores(
            self.window(&scores),
            trajectory.momentum,
            spread,
            confidence.score,
        ));
        let prior = self.prior_instability(&scores);
        let fragility = compute_fragility(instability.index, prior, confidence.score);
        let warning = evaluate_early_warning(
            instability.index,
            baseline.time_to_critical,
            confidence.band,
            &self.settings.signals,
        );

        if warning.triggered {
            tracing::debug!(
                risk_id = %risk.id,
                instability = instability.index,
                reasons = ?warning.reasons,
                "early warning raised"
            );
        }

        RiskMitigationForecast {
            risk_id: risk.id.clone(),
            mitigation_insufficient: mitigated.crosses_critical_within_window,
            time_to_critical_baseline: baseline.time_to_critical,
            time_to_critical_mitigated: mitigated.time_to_critical,
            baseline,
            mitigated,
            forecast_confidence: confidence.score,
            confidence_band: confidence.band,
            scenario_ttc,
            instability,
            fragility,
            early_warning: warning.triggered,
            early_warning_reasons: warning.reasons,
            projection_profile_used: profile,
        }
    }

    /// Project a trajectory under one profile's decays.
    ///
    /// ```text
    /// projected_k  = clamp(current + momentum * momentumDecay^k, 0, 100)
    /// confidence_k = base * confidenceDecay^k
    /// ```
    fn project(&self, risk_id: &str, trajectory: Trajectory, scenario: Scenario) -> RiskForecast {
        let DecayParams {
            momentum_decay,
            confidence_decay,
        } = self.profiles.params(scenario);
        let threshold = self.settings.critical_threshold;
        let horizon = self.settings.horizon;

        let mut points = Vec::with_capacity(horizon as usize);
        let mut time_to_critical = None;
        for step in 1..=horizon {
            let k = step as i32;
            let projected_score = score_at(trajectory, momentum_decay, k);
            if time_to_critical.is_none() && projected_score >= threshold {
                time_to_critical = Some(step);
            }
            points.push(ForecastPoint {
                step,
                projected_score,
                projected_delta_from_now: projected_score - trajectory.current,
                confidence: clamp01_or(trajectory.confidence * confidence_decay.powi(k), 0.0),
            });
        }

        let currently_critical = trajectory.current >= threshold;
        RiskForecast {
            risk_id: risk_id.to_string(),
            horizon,
            current_score: trajectory.current,
            momentum: trajectory.momentum,
            direction: trajectory.direction,
            points,
            time_to_critical,
            crosses_critical_within_window: currently_critical || time_to_critical.is_some(),
            projected_critical: !currently_critical && time_to_critical.is_some(),
        }
    }

    fn tracker(&self, scores: &[f64]) -> MomentumTracker {
        let mut tracker = MomentumTracker::with_window(self.settings.momentum_window);
        for &score in scores {
            tracker.record(score);
        }
        tracker
    }

    fn window<'a>(&self, scores: &'a [f64]) -> &'a [f64] {
        let window = self.settings.confidence.window();
        &scores[scores.len().saturating_sub(window)..]
    }

    /// Instability as it stood one cycle ago, recomputed without the newest
    /// snapshot. `None` when there is no earlier history.
    fn prior_instability(&self, scores: &[f64]) -> Option<f64> {
        if scores.len() < 2 {
            return None;
        }
        let earlier = &scores[..scores.len() - 1];
        let confidence = self.settings.confidence.score_values(earlier);
        let tracker = self.tracker(earlier);
        let trajectory = Trajectory {
            current: earlier[earlier.len() - 1],
            momentum: tracker.momentum(),
            direction: tracker.direction(),
            confidence: confidence.fraction(),
        };
        let spread = (self.final_score(trajectory, Scenario::Aggressive)
            - self.final_score(trajectory, Scenario::Conservative))
        .abs();
        let inputs = InstabilityInputs::from_scores(
            self.window(earlier),
            trajectory.momentum,
            spread,
            confidence.score,
        );
        Some(compute_instability(&inputs).index)
    }

    fn final_score(&self, trajectory: Trajectory, scenario: Scenario) -> f64 {
        let decay = self.profiles.params(scenario).momentum_decay;
        score_at(trajectory, decay, self.settings.horizon as i32)
    }
}

fn score_at(trajectory: Trajectory, momentum_decay: f64, step: i32) -> f64 {
    clamp_score(trajectory.current + trajectory.momentum * momentum_decay.powi(step))
}

/// Momentum after mitigation: a rising score slows by
/// `1 - effectiveness * confidence` once the mitigation is active or done.
fn mitigated_momentum(risk: &Risk, momentum: f64) -> f64 {
    match &risk.mitigation {
        Some(m) if m.status.is_in_effect() && momentum > 0.0 => {
            let reduction = clamp01_or(m.effectiveness, 0.0) * clamp01_or(m.confidence, 0.0);
            momentum * (1.0 - reduction)
        }
        _ => momentum,
    }
}

/// Project `risks` with default settings and profiles.
pub fn run_forward_projection(
    risks: &[Risk],
    history: &dyn HistoryLookup,
    profile: Option<Scenario>,
) -> ForwardProjection {
    ForwardProjector::default().run(risks, history, &ProjectionOptions { profile })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(current: f64, momentum: f64) -> Trajectory {
        Trajectory {
            current,
            momentum,
            direction: MomentumDirection::Rising,
            confidence: 0.9,
        }
    }

    #[test]
    fn time_to_critical_per_profile() {
        let projector = ForwardProjector::default();
        let t = trajectory(65.0, 6.0);
        assert_eq!(projector.project("r", t, Scenario::Neutral).time_to_critical, Some(1));
        assert_eq!(projector.project("r", t, Scenario::Aggressive).time_to_critical, Some(1));
        assert_eq!(projector.project("r", t, Scenario::Conservative).time_to_critical, None);
    }

    #[test]
    fn each_step_applies_one_decayed_increment() {
        let projector = ForwardProjector::default();
        let f = projector.project("r", trajectory(65.0, 4.0), Scenario::Neutral);
        for point in &f.points {
            let expected = 65.0 + 4.0 * 0.85_f64.powi(point.step as i32);
            assert!((point.projected_score - expected).abs() < 1e-9, "step {}", point.step);
        }
        assert!((f.points[1].projected_score - 67.89).abs() < 1e-9);
        assert!(f.time_to_critical.is_none());
        assert!(!f.projected_critical);
        assert!(!f.crosses_critical_within_window);
    }

    #[test]
    fn points_are_clamped_and_confidence_decays() {
        let projector = ForwardProjector::default();
        let f = projector.project("r", trajectory(95.0, 20.0), Scenario::Aggressive);
        assert!(f.points.iter().all(|p| p.projected_score <= 100.0));
        assert!(f.points.windows(2).all(|w| w[1].confidence < w[0].confidence));
        assert!(f.crosses_critical_within_window);
        assert!(!f.projected_critical);
    }

    #[test]
    fn final_score_matches_projection() {
        let projector = ForwardProjector::default();
        let t = trajectory(40.0, 3.0);
        let projected = projector.project("r", t, Scenario::Neutral).final_score();
        assert!((projector.final_score(t, Scenario::Neutral) - projected).abs() < 1e-9);
    }

    #[test]
    fn planned_mitigation_does_not_slow_momentum() {
        let mut risk = Risk::new("r", "ops", 0.5, 10.0);
        risk.mitigation = Some(riskcast_core::types::MitigationProfile {
            status: riskcast_core::types::MitigationStatus::Planned,
            effectiveness: 0.9,
            confidence: 0.9,
            ..Default::default()
        });
        assert_eq!(mitigated_momentum(&risk, 4.0), 4.0);
    }

    #[test]
    fn falling_momentum_is_left_alone() {
        let mut risk = Risk::new("r", "ops", 0.5, 10.0);
        risk.mitigation = Some(riskcast_core::types::MitigationProfile {
            status: riskcast_core::types::MitigationStatus::Active,
            effectiveness: 0.5,
            confidence: 0.5,
            ..Default::default()
        });
        assert_eq!(mitigated_momentum(&risk, -3.0), -3.0);
        assert_eq!(mitigated_momentum(&risk, 4.0), 3.0);
    }
}
