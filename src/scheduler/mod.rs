// SPDX-License-Identifier: MPL-2.0
//! Deferred delivery of notification messages.
//!
//! The manager never waits. It asks a [`Scheduler`] to hand a [`Message`]
//! back later, either after the next paint or after a delay, and the host
//! feeds that message into `Manager::update` when it comes due.
//!
//! - [`ManualScheduler`] - Virtual clock driven explicitly (tests, embedders
//!   with their own frame loop)
//! - [`TokioScheduler`] - Real timers on a tokio runtime

mod manual;
mod runtime;

pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use crate::ui::notifications::Message;
use std::time::Duration;

/// Source of deferred continuations.
pub trait Scheduler {
    /// Delivers `message` after the next paint.
    fn request_frame(&mut self, message: Message);

    /// Delivers `message` once `delay` has elapsed.
    fn set_timeout(&mut self, delay: Duration, message: Message);
}
