// SPDX-License-Identifier: MPL-2.0
//! Messages driving the toast lifecycle.

use super::ToastId;

/// Continuations and interactions delivered to `Manager::update`.
///
/// Every variant is safe to deliver for a toast that no longer exists;
/// stale messages are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// First paint after the element was attached.
    EnterFrame(ToastId),
    /// Second paint: the initial state is committed, start the entry transition.
    EnterCommit(ToastId),
    /// Auto-dismiss delay elapsed.
    Expired(ToastId),
    /// The user clicked the toast.
    Clicked(ToastId),
    /// Exit transition finished; detach the element.
    ExitComplete(ToastId),
}

impl Message {
    /// Returns the toast this message targets.
    #[must_use]
    pub fn toast_id(&self) -> &ToastId {
        match self {
            Message::EnterFrame(id)
            | Message::EnterCommit(id)
            | Message::Expired(id)
            | Message::Clicked(id)
            | Message::ExitComplete(id) => id,
        }
    }
}
