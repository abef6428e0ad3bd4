// SPDX-License-Identifier: MPL-2.0
//! Lifecycle phase of a rendered toast.

/// Lifecycle stage of a rendered toast element.
///
/// Phases only move forward: `Pending -> Visible -> Dismissing`. A toast
/// dismissed before its entry animation committed skips `Visible`. Once the
/// element is detached the toast has no phase at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Attached in its pre-animation state, waiting for the entry frames.
    #[default]
    Pending,
    /// Carries the visible marker.
    Visible,
    /// Exit transition running; the element is detached when it completes.
    Dismissing,
}

impl Phase {
    fn rank(self) -> u8 {
        match self {
            Phase::Pending => 0,
            Phase::Visible => 1,
            Phase::Dismissing => 2,
        }
    }

    /// Moves to `next` if it lies strictly ahead of the current phase.
    ///
    /// Returns `false`, leaving the phase untouched, otherwise.
    pub fn advance_to(&mut self, next: Phase) -> bool {
        if next.rank() > self.rank() {
            *self = next;
            true
        } else {
            false
        }
    }
}
