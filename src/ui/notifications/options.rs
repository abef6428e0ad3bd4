// SPDX-License-Identifier: MPL-2.0
//! Installation options.

use crate::domain::toast::{DismissAfter, Position};

/// Options fixed when the manager is installed on a surface.
///
/// # Example
///
/// ```
/// use toast_rack::domain::toast::{DismissAfter, Position};
/// use toast_rack::ui::notifications::ToastOptions;
///
/// let options = ToastOptions::default()
///     .with_position(Position::TopLeft)
///     .with_default_duration(DismissAfter::from_millis(1000));
///
/// assert_eq!(options.position(), Position::TopLeft);
/// assert_eq!(options.default_duration().millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastOptions {
    position: Position,
    default_duration: DismissAfter,
}

impl ToastOptions {
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the delay used when `add` is called without one.
    #[must_use]
    pub fn with_default_duration(mut self, default_duration: DismissAfter) -> Self {
        self.default_duration = default_duration;
        self
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn default_duration(&self) -> DismissAfter {
        self.default_duration
    }
}
