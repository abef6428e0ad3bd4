// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast lifecycle tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Why a toast left the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Its auto-dismiss delay elapsed.
    Expired,
    /// The user clicked it.
    Clicked,
    /// The host removed it through the API.
    Programmatic,
}

/// Category of a non-fatal anomaly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A category name outside the fixed set was degraded to `info`.
    UnknownCategory,
    #[default]
    Other,
}

/// A non-fatal anomaly worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
///
/// Identifiers, categories and positions are recorded by name so reports
/// stay readable without the crate's types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The manager was installed (or reinstalled) on a surface.
    Installed {
        position: String,
        default_duration_ms: u64,
        reinstall: bool,
    },

    /// A toast was added and rendered.
    ToastShown {
        id: String,
        category: String,
        /// Zero when the toast never auto-dismisses.
        duration_ms: u64,
    },

    /// A toast left the registry and started its exit transition.
    ToastDismissed { id: String, reason: DismissReason },

    /// Non-critical anomaly.
    Warning { event: WarningEvent },
}
