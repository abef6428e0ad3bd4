// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss delay newtype.

use std::time::Duration;

/// Auto-dismiss bounds, in milliseconds.
pub mod dismiss_bounds {
    /// Value meaning "never auto-dismiss".
    pub const NEVER_MS: u64 = 0;
    /// Default delay before a toast is auto-dismissed.
    pub const DEFAULT_MS: u64 = 3000;
}

/// Delay before a toast is automatically dismissed.
///
/// Zero means the toast stays until the user dismisses it.
///
/// # Example
///
/// ```
/// use toast_rack::domain::toast::DismissAfter;
/// use std::time::Duration;
///
/// let delay = DismissAfter::from_millis(1500);
/// assert_eq!(delay.as_duration(), Some(Duration::from_millis(1500)));
///
/// assert!(DismissAfter::never().is_never());
/// assert_eq!(DismissAfter::never().as_duration(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissAfter(u64);

impl DismissAfter {
    /// Creates a delay from milliseconds. Zero disables auto-dismiss.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// A delay that never elapses.
    #[must_use]
    pub const fn never() -> Self {
        Self(dismiss_bounds::NEVER_MS)
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns true if the toast must be dismissed manually.
    #[must_use]
    pub fn is_never(self) -> bool {
        self.0 == dismiss_bounds::NEVER_MS
    }

    /// Returns the delay as a `Duration`, or `None` for "never".
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        if self.is_never() {
            None
        } else {
            Some(Duration::from_millis(self.0))
        }
    }
}

impl Default for DismissAfter {
    fn default() -> Self {
        Self(dismiss_bounds::DEFAULT_MS)
    }
}

impl From<Duration> for DismissAfter {
    #[allow(clippy::cast_possible_truncation)] // u64 millis covers ~584 million years
    fn from(duration: Duration) -> Self {
        Self(duration.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(
            DismissAfter::default().as_duration(),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn zero_means_never() {
        let delay = DismissAfter::from_millis(0);
        assert!(delay.is_never());
        assert_eq!(delay, DismissAfter::never());
        assert!(delay.as_duration().is_none());
    }

    #[test]
    fn from_duration_keeps_millis() {
        let delay = DismissAfter::from(Duration::from_millis(1250));
        assert_eq!(delay.millis(), 1250);
        assert!(!delay.is_never());
    }
}
