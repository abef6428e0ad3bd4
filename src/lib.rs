// SPDX-License-Identifier: MPL-2.0
//! `toast_rack` is a lightweight toast notification manager.
//!
//! Toasts render into any [`ui::surface::Surface`] and schedule their
//! transitions through a [`scheduler::Scheduler`], so the same manager runs
//! against a headless document in tests and on a tokio runtime in services.

#![doc(html_root_url = "https://docs.rs/toast_rack/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod scheduler;
pub mod service;
pub mod ui;
