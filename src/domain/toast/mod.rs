// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module provides pure domain types for toast notifications:
//! - [`Category`]: Visual classification of a toast (success, error, ...)
//! - [`Position`]: Screen anchor of the toast container
//! - [`DismissAfter`]: Auto-dismiss delay, where zero means "never"
//! - [`Phase`]: Lifecycle stage of a rendered toast

mod category;
mod dismiss_after;
mod phase;
mod position;

pub use category::Category;
pub use dismiss_after::{dismiss_bounds, DismissAfter};
pub use phase::Phase;
pub use position::{ParsePositionError, Position};
