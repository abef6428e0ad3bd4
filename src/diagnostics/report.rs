// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::DiagnosticEventKind;

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Offset in ms fits comfortably in u64
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }
}

/// Snapshot of collected events.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    /// Wall-clock time collection started.
    pub started_at: DateTime<Utc>,
    /// How long collection has been running.
    pub duration_ms: u64,
    pub event_count: usize,
    /// Events pushed out of the log by newer ones.
    pub evicted_count: usize,
    /// Events lost before reaching the log.
    pub dropped_count: usize,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, duration_ms: u64, events: Vec<SerializableEvent>) -> Self {
        Self {
            started_at,
            duration_ms,
            event_count: events.len(),
            evicted_count: 0,
            dropped_count: 0,
            events,
        }
    }

    /// Records how many events the report is missing.
    #[must_use]
    pub fn with_losses(mut self, evicted_count: usize, dropped_count: usize) -> Self {
        self.evicted_count = evicted_count;
        self.dropped_count = dropped_count;
        self
    }
}
