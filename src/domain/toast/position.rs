// SPDX-License-Identifier: MPL-2.0
//! Screen position of the toast container.

use std::fmt;
use std::str::FromStr;

/// Screen corner or edge the toast container is anchored to.
///
/// Chosen once at installation; every toast shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    TopRight,
    TopLeft,
    TopCenter,
    #[default]
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl Position {
    /// All positions, in declaration order.
    pub const ALL: [Position; 6] = [
        Position::TopRight,
        Position::TopLeft,
        Position::TopCenter,
        Position::BottomRight,
        Position::BottomLeft,
        Position::BottomCenter,
    ];

    /// Returns whether the container is anchored to the top edge.
    ///
    /// Top-anchored containers show the newest toast first, closest to the edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopRight | Position::TopLeft | Position::TopCenter
        )
    }

    /// Returns the kebab-case name (e.g. `"bottom-right"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Returns the CSS class that anchors the container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Position::TopRight => "toast-pos-top-right",
            Position::TopLeft => "toast-pos-top-left",
            Position::TopCenter => "toast-pos-top-center",
            Position::BottomRight => "toast-pos-bottom-right",
            Position::BottomLeft => "toast-pos-bottom-left",
            Position::BottomCenter => "toast-pos-bottom-center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a position name is not one of the six known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position: {}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}
