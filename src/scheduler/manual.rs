// SPDX-License-Identifier: MPL-2.0
//! Explicitly driven scheduler with a virtual clock.

use super::Scheduler;
use crate::ui::notifications::Message;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Timer {
    due: Duration,
    seq: u64,
    message: Message,
}

/// Scheduler whose time only moves when told to.
///
/// Frame requests queue until [`paint`](Self::paint); timers fire through
/// [`pop_due`](Self::pop_due) in due order, ties broken by scheduling order.
///
/// # Example
///
/// ```
/// use toast_rack::scheduler::{ManualScheduler, Scheduler};
/// use toast_rack::ui::notifications::{Message, ToastId};
/// use std::time::Duration;
///
/// let mut scheduler = ManualScheduler::new();
/// let id = ToastId::generate();
/// scheduler.set_timeout(Duration::from_millis(100), Message::Expired(id.clone()));
///
/// assert_eq!(scheduler.pop_due(Duration::from_millis(99)), None);
/// assert_eq!(
///     scheduler.pop_due(Duration::from_millis(100)),
///     Some(Message::Expired(id))
/// );
/// assert_eq!(scheduler.now(), Duration::from_millis(100));
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    frames: VecDeque<Message>,
    timers: Vec<Timer>,
    next_seq: u64,
}

impl ManualScheduler {
    /// Creates a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of frame requests waiting for the next paint.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of timers not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Takes every frame request made before this paint.
    ///
    /// Requests made while handling the returned messages wait for the
    /// following paint.
    pub fn paint(&mut self) -> Vec<Message> {
        self.frames.drain(..).collect()
    }

    /// Pops the earliest timer due at or before `deadline`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Message> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)?;
        let timer = self.timers.swap_remove(index);
        self.now = self.now.max(timer.due);
        Some(timer.message)
    }

    /// Moves the clock forward to `deadline` without firing anything.
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self, message: Message) {
        self.frames.push_back(message);
    }

    fn set_timeout(&mut self, delay: Duration, message: Message) {
        self.timers.push(Timer {
            due: self.now + delay,
            seq: self.next_seq,
            message,
        });
        self.next_seq += 1;
    }
}
