// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`EventCapacity`]: Size of the toast lifecycle event log

mod newtypes;

pub use newtypes::{event_capacity_bounds, EventCapacity};
