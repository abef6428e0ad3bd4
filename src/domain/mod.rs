// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core toast types with ZERO external dependencies.
//!
//! This module contains pure value objects and business rules. It depends
//! only on `std` so it can be tested without any rendering surface.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`EventCapacity`](diagnostics::EventCapacity))
//! - [`toast`]: Toast types ([`Category`](toast::Category), [`Position`](toast::Position),
//!   [`DismissAfter`](toast::DismissAfter), [`Phase`](toast::Phase))

pub mod diagnostics;
pub mod toast;
