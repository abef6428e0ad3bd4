// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed scheduler.

use super::Scheduler;
use crate::config::FRAME_INTERVAL_MS;
use crate::ui::notifications::Message;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Scheduler spawning one tokio task per continuation.
///
/// Each task sleeps, then sends its message on the channel the host drains.
/// Without a real paint loop a frame is a fixed [`FRAME_INTERVAL_MS`] delay.
/// Must be used from inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: UnboundedSender<Message>,
    in_flight: Arc<AtomicUsize>,
    frame_interval: Duration,
}

impl TokioScheduler {
    /// Creates a scheduler delivering on `tx`.
    #[must_use]
    pub fn new(tx: UnboundedSender<Message>) -> Self {
        Self {
            tx,
            in_flight: Arc::new(AtomicUsize::new(0)),
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        }
    }

    /// Overrides the simulated frame interval.
    #[must_use]
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Counter of scheduled messages not yet acknowledged by the receiver.
    ///
    /// The receiving side calls [`acknowledge`](Self::acknowledge) once per
    /// delivered message.
    #[must_use]
    pub fn in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.in_flight)
    }

    /// Marks one delivered message as handled on `counter`.
    pub fn acknowledge(counter: &AtomicUsize) {
        counter.fetch_sub(1, Ordering::SeqCst);
    }

    fn spawn_delayed(&self, delay: Duration, message: Message) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host shut down; nothing left to notify
            let _ = tx.send(message);
        });
    }
}

impl Scheduler for TokioScheduler {
    fn request_frame(&mut self, message: Message) {
        self.spawn_delayed(self.frame_interval, message);
    }

    fn set_timeout(&mut self, delay: Duration, message: Message) {
        self.spawn_delayed(delay, message);
    }
}
