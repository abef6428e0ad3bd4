// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss delay and animation timings
//! - **Diagnostics**: Event buffer capacity

use crate::domain::diagnostics::event_capacity_bounds;
use crate::domain::toast::dismiss_bounds;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay in milliseconds (0 disables auto-dismiss).
pub const DEFAULT_DURATION_MS: u64 = dismiss_bounds::DEFAULT_MS;

/// Length of the exit transition before an element is detached.
///
/// Matches the `0.3s` opacity/transform transition in the style sheet.
pub const EXIT_TRANSITION_MS: u64 = 300;

/// Interval between frames when the host has no real paint loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = event_capacity_bounds::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_transition_is_shorter_than_default_duration() {
        assert!(EXIT_TRANSITION_MS < DEFAULT_DURATION_MS);
    }

    #[test]
    fn frame_interval_is_shorter_than_exit_transition() {
        assert!(FRAME_INTERVAL_MS < EXIT_TRANSITION_MS);
    }
}
