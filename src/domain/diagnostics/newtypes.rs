// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

use std::fmt;

/// How many toast lifecycle events the diagnostics log may hold.
pub mod event_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 10_000;
    /// Room for roughly a hundred toasts shown and dismissed.
    pub const DEFAULT: usize = 256;
}

/// Number of toast lifecycle events kept in memory.
///
/// A toast produces two events (shown, dismissed), so the capacity also
/// bounds how much history a report can cover.
///
/// # Example
///
/// ```
/// use toast_rack::domain::diagnostics::EventCapacity;
///
/// assert_eq!(EventCapacity::new(500).value(), 500);
/// assert_eq!(EventCapacity::new(1).value(), 16);
/// assert_eq!(EventCapacity::checked(1), None);
/// assert_eq!(EventCapacity::new(256).toasts_covered(), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a capacity, clamping out-of-range values.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_capacity_bounds::MIN, event_capacity_bounds::MAX))
    }

    /// Creates a capacity only if `value` is already in range.
    #[must_use]
    pub fn checked(value: usize) -> Option<Self> {
        (event_capacity_bounds::MIN..=event_capacity_bounds::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Number of complete toast lifecycles (shown + dismissed) that fit.
    #[must_use]
    pub fn toasts_covered(self) -> usize {
        self.0 / 2
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(event_capacity_bounds::DEFAULT)
    }
}

impl fmt::Display for EventCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} events", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(EventCapacity::new(0).value(), event_capacity_bounds::MIN);
        assert_eq!(
            EventCapacity::new(100_000).value(),
            event_capacity_bounds::MAX
        );
    }

    #[test]
    fn checked_rejects_what_new_would_clamp() {
        assert_eq!(EventCapacity::checked(15), None);
        assert_eq!(EventCapacity::checked(10_001), None);
        assert_eq!(EventCapacity::checked(16), Some(EventCapacity::new(16)));
        assert_eq!(EventCapacity::checked(4096).map(EventCapacity::value), Some(4096));
    }

    #[test]
    fn default_covers_a_hundred_toasts() {
        assert_eq!(EventCapacity::default().value(), 256);
        assert!(EventCapacity::default().toasts_covered() >= 100);
    }

    #[test]
    fn display_names_the_unit() {
        assert_eq!(EventCapacity::new(64).to_string(), "64 events");
    }
}
