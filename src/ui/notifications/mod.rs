// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are short, non-blocking messages stacked in a corner of the
//! surface. Each one fades in, stays for its auto-dismiss delay (or until
//! clicked), then fades out and is detached.
//!
//! # Components
//!
//! - [`manager`] - `Manager` owning the registry and the rendered elements
//! - [`toast`] - `Toast` record and its `ToastId`
//! - [`message`] - Lifecycle continuations fed back into `Manager::update`
//! - [`options`] - Installation options (position, default delay)
//! - [`api`] - `ToastApi`, the fire-and-forget calling surface
//!
//! # Usage
//!
//! ```
//! use toast_rack::scheduler::ManualScheduler;
//! use toast_rack::ui::notifications::{Manager, ToastOptions};
//! use toast_rack::ui::surface::HeadlessDocument;
//! use std::time::Duration;
//!
//! let mut manager = Manager::install(
//!     HeadlessDocument::new(),
//!     ManualScheduler::new(),
//!     &ToastOptions::default(),
//! );
//!
//! manager.success("Image saved", None);
//! manager.paint();
//! manager.paint();
//! assert_eq!(manager.active_count(), 1);
//!
//! // Default delay is 3 s, then a 300 ms exit transition
//! manager.advance(Duration::from_millis(3300));
//! assert!(!manager.has_toasts());
//! ```
//!
//! # Lifecycle
//!
//! - Pending: attached, not yet visible
//! - Visible: entry transition started after the second paint
//! - Dismissing: out of the registry, exit transition running
//!
//! Phases only move forward. A toast dismissed before its second paint goes
//! straight to Dismissing and never becomes visible.

pub mod api;
pub mod manager;
pub mod message;
pub mod options;
pub mod toast;

pub use api::ToastApi;
pub use manager::Manager;
pub use message::Message;
pub use options::ToastOptions;
pub use toast::{ParseToastIdError, Toast, ToastId};
