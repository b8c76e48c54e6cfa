//! Score-history collaborator interface.
//!
//! The engine never owns history; it asks a `HistoryLookup` for the latest
//! snapshot and the ordered history of each risk.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};

use crate::constants::MAX_HISTORY_PER_RISK;
use crate::types::{Risk, RiskSnapshot};

/// Read access to per-risk score history.
pub trait HistoryLookup: Send + Sync {
    /// Most recent snapshot for a risk, if any.
    fn latest_snapshot(&self, risk_id: &str) -> Option<RiskSnapshot>;

    /// Full retained history for a risk, oldest first.
    fn risk_history(&self, risk_id: &str) -> Vec<RiskSnapshot>;
}

/// In-memory, append-only history store with a per-risk cap.
///
/// When a risk's history is full, the oldest snapshot is evicted first.
/// Snapshots older than the current tail are rejected so the history stays
/// time-ordered.
#[derive(Debug, Clone)]
pub struct InMemoryHistoryStore {
    histories: HashMap<String, VecDeque<RiskSnapshot>>,
    next_cycle: HashMap<String, u32>,
    max_per_risk: usize,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_PER_RISK)
    }

    /// Create a store that keeps at most `max_per_risk` snapshots per risk.
    pub fn with_capacity(max_per_risk: usize) -> Self {
        Self {
            histories: HashMap::new(),
            next_cycle: HashMap::new(),
            max_per_risk: max_per_risk.max(1),
        }
    }

    /// Append a snapshot for a risk. Returns `false` if it was rejected for
    /// being older than the latest retained snapshot.
    pub fn record(&mut self, risk_id: &str, timestamp: DateTime<Utc>, composite_score: f64) -> bool {
        let history = self.histories.entry(risk_id.to_string()).or_default();
        if let Some(last) = history.back() {
            if timestamp < last.timestamp {
                tracing::warn!(
                    risk_id,
                    %timestamp,
                    latest = %last.timestamp,
                    "rejecting out-of-order score snapshot"
                );
                return false;
            }
        }

        let cycle = self.next_cycle.entry(risk_id.to_string()).or_insert(0);
        history.push_back(RiskSnapshot::new(risk_id, *cycle, timestamp, composite_score));
        *cycle += 1;

        while history.len() > self.max_per_risk {
            history.pop_front();
        }
        true
    }

    /// Number of snapshots retained for a risk.
    pub fn history_len(&self, risk_id: &str) -> usize {
        self.histories.get(risk_id).map_or(0, VecDeque::len)
    }

    /// True when no risk has any snapshot.
    pub fn is_empty(&self) -> bool {
        self.histories.values().all(VecDeque::is_empty)
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLookup for InMemoryHistoryStore {
    fn latest_snapshot(&self, risk_id: &str) -> Option<RiskSnapshot> {
        self.histories.get(risk_id).and_then(|h| h.back().cloned())
    }

    fn risk_history(&self, risk_id: &str) -> Vec<RiskSnapshot> {
        self.histories
            .get(risk_id)
            .map(|h| h.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// History lookup backed by the `score_history` carried on risk records.
#[derive(Debug, Clone, Default)]
pub struct RiskHistoryIndex {
    histories: HashMap<String, Vec<RiskSnapshot>>,
}

impl RiskHistoryIndex {
    /// Index the histories of the given risks. Duplicate ids keep the last
    /// record seen.
    pub fn from_risks(risks: &[Risk]) -> Self {
        let histories = risks
            .iter()
            .map(|risk| {
                let snapshots = risk
                    .score_history
                    .iter()
                    .enumerate()
                    .map(|(i, s)| RiskSnapshot::new(&risk.id, i as u32, s.timestamp, s.composite_score))
                    .collect();
                (risk.id.clone(), snapshots)
            })
            .collect();
        Self { histories }
    }
}

impl HistoryLookup for RiskHistoryIndex {
    fn latest_snapshot(&self, risk_id: &str) -> Option<RiskSnapshot> {
        self.histories.get(risk_id).and_then(|h| h.last().cloned())
    }

    fn risk_history(&self, risk_id: &str) -> Vec<RiskSnapshot> {
        self.histories.get(risk_id).cloned().unwrap_or_default()
    }
}
