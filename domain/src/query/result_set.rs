//! Aggregated per-model outcomes for one orchestration run

use super::outcome::QueryOutcome;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from logical model key to [`QueryOutcome`].
///
/// Insertion order equals registry iteration order. Built incrementally by
/// the orchestrator; read-only once handed to a sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: IndexMap<String, QueryOutcome>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one model key.
    pub fn record(&mut self, key: impl Into<String>, outcome: QueryOutcome) {
        self.entries.insert(key.into(), outcome);
    }

    pub fn get(&self, key: &str) -> Option<&QueryOutcome> {
        self.entries.get(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryOutcome)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate only the successful outcomes.
    pub fn successes(&self) -> impl Iterator<Item = (&str, &QueryOutcome)> {
        self.iter().filter(|(_, o)| o.is_success())
    }

    /// Iterate only the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &QueryOutcome)> {
        self.iter().filter(|(_, o)| !o.is_success())
    }
}
