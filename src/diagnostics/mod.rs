// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast lifecycle.
//!
//! Captures installation, show and dismiss events plus non-fatal warnings
//! in a memory-bounded event log, exportable as JSON.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking event sender
//! - [`DiagnosticsCollector`]: Drains the channel into an [`EventLog`]
//! - [`DiagnosticEvent`]: Timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticReport`]: Serializable snapshot

mod collector;
mod event_log;
mod events;
mod report;

pub use crate::domain::diagnostics::EventCapacity;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use event_log::EventLog;
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason, WarningEvent, WarningType};
pub use report::{DiagnosticReport, SerializableEvent};
