// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for toast lifecycle events.
//!
//! The manager logs through a cheap [`DiagnosticsHandle`]; the collector
//! drains the channel into an [`EventLog`] and exports JSON reports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    DiagnosticEvent, DiagnosticEventKind, DiagnosticReport, DismissReason, EventLog,
    SerializableEvent, WarningEvent,
};
use crate::domain::diagnostics::EventCapacity;
use crate::domain::toast::{DismissAfter, Position};
use crate::error::Result;
use crate::ui::notifications::Toast;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and usable from any thread. Sends never block: when the
/// channel is full the event is dropped and counted.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
    dropped: Arc<AtomicUsize>,
}

impl DiagnosticsHandle {
    fn send(&self, kind: DiagnosticEventKind) {
        if self.event_tx.try_send(DiagnosticEvent::new(kind)).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Logs an installation on a surface.
    pub fn log_installed(&self, position: Position, default_duration: DismissAfter, reinstall: bool) {
        self.send(DiagnosticEventKind::Installed {
            position: position.as_str().to_string(),
            default_duration_ms: default_duration.millis(),
            reinstall,
        });
    }

    /// Logs a toast entering the registry.
    pub fn log_shown(&self, toast: &Toast) {
        self.send(DiagnosticEventKind::ToastShown {
            id: toast.id().to_string(),
            category: toast.category().as_str().to_string(),
            duration_ms: toast.duration().millis(),
        });
    }

    /// Logs a toast leaving the registry.
    pub fn log_dismissed(&self, id: &str, reason: DismissReason) {
        self.send(DiagnosticEventKind::ToastDismissed {
            id: id.to_string(),
            reason,
        });
    }

    /// Logs a non-fatal anomaly.
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }
}

/// Central collector for diagnostic events.
///
/// The channel holds as many undrained events as the log itself, so a
/// host that drains at least once per `capacity` events loses nothing to
/// the channel. Old events are evicted once the log is full.
pub struct DiagnosticsCollector {
    log: EventLog,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    dropped: Arc<AtomicUsize>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.value());

        Self {
            log: EventLog::new(capacity),
            event_rx,
            event_tx,
            dropped: Arc::new(AtomicUsize::new(0)),
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
            dropped: Arc::clone(&self.dropped),
        }
    }

    /// Moves every pending event from the channel into the log.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.log.record(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Returns stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    pub fn clear(&mut self) {
        self.log.clear();
        self.dropped.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn capacity(&self) -> EventCapacity {
        self.log.capacity()
    }

    /// Events lost because the channel was full when they were sent.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Builds a report from the current log contents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn report(&self) -> DiagnosticReport {
        let events = self
            .log
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        DiagnosticReport::new(
            self.collection_started_at_utc,
            self.collection_started_at.elapsed().as_millis() as u64,
            events,
        )
        .with_losses(self.log.evicted(), self.dropped())
    }

    /// Exports the collected events as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Diagnostics` if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::WarningType;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::default());
        let handle = collector.handle();

        handle.log_installed(Position::TopLeft, DismissAfter::from_millis(1000), false);
        handle.log_dismissed("1-abc", DismissReason::Clicked);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds[0],
            DiagnosticEventKind::Installed {
                position: "top-left".to_string(),
                default_duration_ms: 1000,
                reinstall: false,
            }
        );
    }

    #[test]
    fn channel_holds_a_full_log_between_drains() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::default());
        let handle = collector.handle();

        for _ in 0..EventCapacity::default().value() {
            handle.log_warning(WarningEvent::new(WarningType::Other, "spam"));
        }
        collector.process_pending();

        assert_eq!(collector.len(), EventCapacity::default().value());
        assert_eq!(collector.dropped(), 0);
    }

    #[test]
    fn overflowing_channel_counts_dropped_events() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::new(16));
        let handle = collector.handle();

        for _ in 0..26 {
            handle.log_warning(WarningEvent::new(WarningType::Other, "spam"));
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        assert_eq!(collector.dropped(), 10);

        let value: serde_json::Value =
            serde_json::from_str(&collector.export_json().expect("export")).expect("valid json");
        assert_eq!(value["dropped_count"], 10);
        assert_eq!(value["evicted_count"], 0);
    }

    #[test]
    fn capacity_bounds_stored_events() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::new(16));
        let handle = collector.handle();

        for round in 0..3 {
            for _ in 0..10 {
                handle.log_dismissed(&format!("round-{round}"), DismissReason::Expired);
            }
            collector.process_pending();
        }

        assert_eq!(collector.len(), 16);
        assert_eq!(collector.capacity().value(), 16);
        assert_eq!(collector.report().evicted_count, 14);
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::default());
        collector
            .handle()
            .log_warning(WarningEvent::new(WarningType::UnknownCategory, "fatal"));
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["event_count"], 1);
        assert_eq!(value["events"][0]["type"], "warning");
        assert_eq!(value["events"][0]["event"]["warning_type"], "unknown_category");
    }

    #[test]
    fn clear_empties_collector() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::default());
        collector.handle().log_dismissed("x", DismissReason::Programmatic);
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
    }
}
