//! Execution results: measurement counts and run metadata.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts keyed by bitstring (qubit n−1 first, matching the
/// simulator's probability labels).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u32>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add occurrences of an outcome.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u32) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Occurrences of an outcome; zero when never observed.
    pub fn get(&self, bitstring: &str) -> u32 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// The most frequent outcome, if any shots were recorded.
    pub fn most_frequent(&self) -> Option<(&str, u32)> {
        self.0
            .iter()
            .max_by_key(|&(_, &count)| count)
            .map(|(bits, &count)| (bits.as_str(), count))
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(bits, &count)| (bits.as_str(), count))
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The outcome of a completed job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts per observed bitstring.
    pub counts: Counts,
    /// Number of shots that produced the counts.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result from counts.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the measured execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
