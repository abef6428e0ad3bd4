// SPDX-License-Identifier: MPL-2.0
//! Bounded log of toast lifecycle events.

use std::collections::VecDeque;

use super::DiagnosticEvent;
use crate::domain::diagnostics::EventCapacity;

/// Lifecycle events, oldest first, bounded by an [`EventCapacity`].
///
/// Recording into a full log evicts the oldest event; evictions are counted
/// so a report can say how much history it lost.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<DiagnosticEvent>,
    capacity: EventCapacity,
    evicted: usize,
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `event`, evicting the oldest one when full.
    pub fn record(&mut self, event: DiagnosticEvent) {
        if self.events.len() >= self.capacity.value() {
            self.events.pop_front();
            self.evicted += 1;
        }
        self.events.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Most recent event.
    #[must_use]
    pub fn latest(&self) -> Option<&DiagnosticEvent> {
        self.events.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> EventCapacity {
        self.capacity
    }

    /// Events pushed out by newer ones since creation or the last clear.
    #[must_use]
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DismissReason};

    fn dismissed(id: &str) -> DiagnosticEvent {
        DiagnosticEvent::new(DiagnosticEventKind::ToastDismissed {
            id: id.to_string(),
            reason: DismissReason::Expired,
        })
    }

    fn ids(log: &EventLog) -> Vec<String> {
        log.iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::ToastDismissed { id, .. } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn full_log_evicts_oldest_and_counts_it() {
        let mut log = EventLog::new(EventCapacity::new(16));
        for i in 0..20 {
            log.record(dismissed(&i.to_string()));
        }

        assert_eq!(log.len(), 16);
        assert_eq!(log.evicted(), 4);
        assert_eq!(ids(&log).first().map(String::as_str), Some("4"));
        assert!(matches!(
            log.latest().map(|e| &e.kind),
            Some(DiagnosticEventKind::ToastDismissed { id, .. }) if id == "19"
        ));
    }

    #[test]
    fn clear_resets_eviction_count() {
        let mut log = EventLog::new(EventCapacity::new(16));
        for i in 0..17 {
            log.record(dismissed(&i.to_string()));
        }
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.evicted(), 0);
        assert_eq!(log.capacity().value(), 16);
        assert!(log.latest().is_none());
    }
}
