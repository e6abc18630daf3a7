//! telemetry.rs
//! Byte and call counters collected while a session or resource runs.
//!
//! Mutable counters accumulate during operation and convert into an
//! immutable `SessionSnapshot` for reporting.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters collected across a handle's lifetime.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    pub calls: u64,
    pub bytes_consumed: u64,
    pub bytes_produced: u64,
    pub frames_completed: u64,
}

impl SessionCounters {
    /// Record one pull or one-shot call.
    pub fn record(&mut self, consumed: usize, produced: usize) {
        self.calls += 1;
        self.bytes_consumed += consumed as u64;
        self.bytes_produced += produced as u64;
    }

    /// Mark one frame driven to its end-of-frame boundary.
    pub fn add_frame(&mut self) {
        self.frames_completed += 1;
    }

    pub fn merge(&mut self, other: &SessionCounters) {
        self.calls += other.calls;
        self.bytes_consumed += other.bytes_consumed;
        self.bytes_produced += other.bytes_produced;
        self.frames_completed += other.frames_completed;
    }
}

impl AddAssign for SessionCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

/// Immutable snapshot with the derived output/input ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub calls: u64,
    pub bytes_consumed: u64,
    pub bytes_produced: u64,
    pub frames_completed: u64,
    pub ratio: f64,
}

impl SessionSnapshot {
    pub fn from_counters(counters: &SessionCounters) -> Self {
        let ratio = if counters.bytes_consumed > 0 {
            counters.bytes_produced as f64 / counters.bytes_consumed as f64
        } else {
            0.0
        };

        Self {
            calls: counters.calls,
            bytes_consumed: counters.bytes_consumed,
            bytes_produced: counters.bytes_produced,
            frames_completed: counters.frames_completed,
            ratio,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
