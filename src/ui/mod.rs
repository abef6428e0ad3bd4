// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": the manager renders into a surface
//! and every deferred step comes back to it as a [`notifications::Message`].
//!
//! - [`notifications`] - Toast registry, lifecycle and public API
//! - [`surface`] - Rendering target abstraction, styles and icons

pub mod notifications;
pub mod surface;
